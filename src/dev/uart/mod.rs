// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! UART Drivers
//!
//! # Supported UARTs
//!
//! - **NS16550**: the APB UART of the Cheshire SoC, 16550 register layout at
//!   a 4-byte stride
//!
//! All transfers are polled; the console is used before any interrupt
//! controller is set up.

pub mod ns16550;

pub use ns16550::Ns16550;
