// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Platform Configuration
//!
//! Build-time description of the board: where the register blocks live,
//! the core clock, and how the console UART and logger are set up.
//!
//! ```rust
//! use cheshire_init::config::CHESHIRE;
//!
//! // Same memory map, FPGA clocked at 25 MHz
//! let config = CHESHIRE.with_core_freq_hz(25_000_000);
//! assert!(config.validate().is_ok());
//! ```

use log::LevelFilter;

use crate::err::{PlatformError, Result};
use crate::soc;

/// Serial line settings for the console UART.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UartConfig {
    /// Input clock of the UART (Hz)
    pub core_freq_hz: u64,

    /// Line rate (baud)
    pub baud: u32,
}

impl UartConfig {
    /// Divisor latch value: `core_freq_hz / (16 * baud)`.
    pub const fn divisor(&self) -> Result<u16> {
        if self.baud == 0 {
            return Err(PlatformError::InvalidBaudRate(self.baud));
        }
        let divisor = self.core_freq_hz / ((self.baud as u64) << 4);
        if divisor == 0 {
            return Err(PlatformError::InvalidBaudRate(self.baud));
        }
        if divisor > u16::MAX as u64 {
            return Err(PlatformError::DivisorOverflow(divisor));
        }
        Ok(divisor as u16)
    }
}

/// Board description consumed by the bring-up code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformConfig {
    /// SoC control register block (holds `HW_FEATURES`)
    pub regs_base: usize,

    /// Console UART register block
    pub uart_base: usize,

    pub uart: UartConfig,

    /// Maximum level passed to the console logger
    pub log_level: LevelFilter,
}

/// Default Cheshire memory map and clocking.
pub const CHESHIRE: PlatformConfig = PlatformConfig {
    regs_base: soc::SOC_REGS_BASE,
    uart_base: soc::UART_BASE,
    uart: UartConfig {
        core_freq_hz: 50_000_000,
        baud: 115_200,
    },
    log_level: LevelFilter::Info,
};

impl Default for PlatformConfig {
    fn default() -> Self {
        CHESHIRE
    }
}

impl PlatformConfig {
    pub const fn with_regs_base(mut self, base: usize) -> Self {
        self.regs_base = base;
        self
    }

    pub const fn with_uart_base(mut self, base: usize) -> Self {
        self.uart_base = base;
        self
    }

    pub const fn with_core_freq_hz(mut self, hz: u64) -> Self {
        self.uart.core_freq_hz = hz;
        self
    }

    pub const fn with_baud(mut self, baud: u32) -> Self {
        self.uart.baud = baud;
        self
    }

    pub const fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Check base alignment and UART clocking.
    pub const fn validate(&self) -> Result<()> {
        if self.regs_base % 4 != 0 {
            return Err(PlatformError::MisalignedOffset(self.regs_base));
        }
        if self.uart_base % 4 != 0 {
            return Err(PlatformError::MisalignedOffset(self.uart_base));
        }
        match self.uart.divisor() {
            Ok(_) => Ok(()),
            Err(err) => Err(err),
        }
    }
}
