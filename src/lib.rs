// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Cheshire SoC Bring-Up
//!
//! Boot-time platform initialization for the Cheshire RISC-V SoC: read the
//! hardware feature register once, then open the drivers of the optional
//! I/O blocks that are actually present in this chip build.
//!
//! # Organization
//!
//! - [`platform`] - Feature-driven peripheral bring-up
//! - [`feature`] - `HW_FEATURES` decoding
//! - [`soc`] - Register map and feature bit indices
//! - [`reg`] - Register access (MMIO and mock)
//! - [`dev`] - Peripheral drivers (UART)
//! - [`debug`] - Console logger for the `log` facade
//! - [`config`] - Board configuration
//! - [`err`] - Error type and status codes
//!
//! On the host only the hardware-independent logic is exercised; the
//! firmware image in `main.rs` wires it to the real memory map.

#![cfg_attr(not(test), no_std)]

pub mod bits;
pub mod config;
pub mod debug;
pub mod dev;
pub mod err;
pub mod feature;
pub mod platform;
pub mod reg;
pub mod soc;

// Re-exports
pub use err::{PlatformError, Result};
pub use feature::{Feature, FeatureDescriptor, HwFeatures};
pub use platform::{initialize_platform, initialize_platform_with, PeripheralEntry, PlatformReport};
pub use reg::{MmioRegisters, RegisterAccess};
