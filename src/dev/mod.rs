// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Device Drivers
//!
//! Drivers for the optional I/O blocks of the SoC. Each driver implements
//! [`Peripheral`], the narrow surface the platform initializer needs.

pub mod uart;

/// Initialization surface of an optional peripheral driver.
pub trait Peripheral {
    /// Short name used in boot logs.
    fn name(&self) -> &'static str;

    /// Bring the device to a usable state.
    ///
    /// Must be idempotent: opening an already open device leaves it in the
    /// same state. Failures are the driver's own business; nothing is
    /// returned to the caller.
    fn open(&mut self);

    fn is_open(&self) -> bool;
}
