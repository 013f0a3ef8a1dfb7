// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Platform Error Codes
//!
//! This module provides the error type and status codes used by the
//! bring-up helpers. The initializer itself reports nothing; errors only
//! come out of the fallible lookups and driver configuration checks.

use core::fmt;

/// Raw status code, negative on failure.
pub type Status = i32;

/// Success status code
pub const STATUS_OK: Status = 0;

/// Invalid arguments error
pub const STATUS_ERR_INVALID_ARGS: Status = -10;

/// Out of range error
pub const STATUS_ERR_OUT_OF_RANGE: Status = -33;

/// Not found error
pub const STATUS_ERR_NOT_FOUND: Status = -3;

/// Errors raised by platform helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// Bit index does not fit in a 32-bit descriptor.
    BitOutOfRange(u32),

    /// No optional feature carries this name.
    UnknownFeature,

    /// Baud rate of zero, or faster than the clock can divide.
    InvalidBaudRate(u32),

    /// The computed divisor does not fit the 16-bit divisor latch.
    DivisorOverflow(u64),

    /// Register offset is not 4-byte aligned.
    MisalignedOffset(usize),
}

impl PlatformError {
    /// Status code for this error.
    pub const fn status(self) -> Status {
        match self {
            PlatformError::BitOutOfRange(_) | PlatformError::DivisorOverflow(_) => {
                STATUS_ERR_OUT_OF_RANGE
            }
            PlatformError::UnknownFeature => STATUS_ERR_NOT_FOUND,
            PlatformError::InvalidBaudRate(_) | PlatformError::MisalignedOffset(_) => {
                STATUS_ERR_INVALID_ARGS
            }
        }
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::BitOutOfRange(index) => {
                write!(f, "bit index {} outside 32-bit descriptor", index)
            }
            PlatformError::UnknownFeature => write!(f, "unknown hardware feature"),
            PlatformError::InvalidBaudRate(baud) => write!(f, "invalid baud rate {}", baud),
            PlatformError::DivisorOverflow(divisor) => {
                write!(f, "baud divisor {} exceeds 16 bits", divisor)
            }
            PlatformError::MisalignedOffset(offset) => {
                write!(f, "register offset {:#x} not word aligned", offset)
            }
        }
    }
}

/// Result alias for platform helpers.
pub type Result<T> = core::result::Result<T, PlatformError>;
