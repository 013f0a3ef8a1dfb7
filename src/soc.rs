// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Cheshire SoC Register Map
//!
//! Addresses and offsets of the SoC control register block and of the
//! optional I/O peripherals. The values are fixed by the hardware build and
//! consumed as-is.
//!
//! # Control Register Block
//!
//! | Offset | Name          | Description                        |
//! |--------|---------------|------------------------------------|
//! | 0x00   | SCRATCH[16]   | Software scratch registers         |
//! | 0x40   | BOOT_MODE     | Boot mode pins                     |
//! | 0x44   | RTC_FREQ      | Real-time clock frequency (Hz)     |
//! | 0x48   | PLATFORM_ROM  | Platform ROM base                  |
//! | 0x4C   | NUM_INT_HARTS | Number of internal harts           |
//! | 0x50   | HW_FEATURES   | Present optional hardware features |
//! | 0x54   | LLC_SIZE      | Last-level cache size (bytes)      |
//! | 0x58   | VGA_PARAMS    | VGA controller parameters          |

// ============================================================================
// Memory Map
// ============================================================================

/// SoC control register block
pub const SOC_REGS_BASE: usize = 0x0300_0000;

/// APB UART (16550 compatible)
pub const UART_BASE: usize = 0x0300_2000;

/// I2C host
pub const I2C_BASE: usize = 0x0300_3000;

/// SPI host
pub const SPI_HOST_BASE: usize = 0x0300_4000;

/// GPIO
pub const GPIO_BASE: usize = 0x0300_5000;

// ============================================================================
// Control Register Offsets
// ============================================================================

pub const SCRATCH_COUNT: usize = 16;
pub const SCRATCH_REG_OFFSET: usize = 0x00;
pub const BOOT_MODE_REG_OFFSET: usize = 0x40;
pub const RTC_FREQ_REG_OFFSET: usize = 0x44;
pub const PLATFORM_ROM_REG_OFFSET: usize = 0x48;
pub const NUM_INT_HARTS_REG_OFFSET: usize = 0x4C;
pub const HW_FEATURES_REG_OFFSET: usize = 0x50;
pub const LLC_SIZE_REG_OFFSET: usize = 0x54;
pub const VGA_PARAMS_REG_OFFSET: usize = 0x58;

// ============================================================================
// HW_FEATURES Bit Indices
// ============================================================================

pub const HW_FEATURES_BOOTROM_BIT: u32 = 0;
pub const HW_FEATURES_LLC_BIT: u32 = 1;
pub const HW_FEATURES_UART_BIT: u32 = 2;
pub const HW_FEATURES_SPI_HOST_BIT: u32 = 3;
pub const HW_FEATURES_I2C_BIT: u32 = 4;
pub const HW_FEATURES_GPIO_BIT: u32 = 5;
pub const HW_FEATURES_DMA_BIT: u32 = 6;
pub const HW_FEATURES_SERIAL_LINK_BIT: u32 = 7;
pub const HW_FEATURES_VGA_BIT: u32 = 8;
pub const HW_FEATURES_AXIRT_BIT: u32 = 9;
pub const HW_FEATURES_CLIC_BIT: u32 = 10;
pub const HW_FEATURES_IRQ_ROUTER_BIT: u32 = 11;
pub const HW_FEATURES_BUS_ERR_BIT: u32 = 12;

/// Layout of the control register block.
///
/// Mirrors the offset constants above; never instantiated, only used to
/// keep the two in agreement.
#[repr(C)]
pub struct SocRegisterBlock {
    pub scratch: [u32; SCRATCH_COUNT],
    pub boot_mode: u32,
    pub rtc_freq: u32,
    pub platform_rom: u32,
    pub num_int_harts: u32,
    pub hw_features: u32,
    pub llc_size: u32,
    pub vga_params: u32,
}
