// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Hardware Feature Detection
//!
//! The SoC advertises which optional blocks exist in the current chip build
//! through the 32-bit `HW_FEATURES` register. This module decodes that
//! register.
//!
//! # Model
//!
//! - [`FeatureDescriptor`]: one snapshot of the register, taken with a
//!   single load and never refreshed.
//! - [`Feature`]: the closed set of named optional features, each bound to
//!   one bit index.
//! - [`HwFeatures`]: the same set as bit masks.
//!
//! A feature is present iff its bit is 1: `(descriptor >> index) & 1 == 1`.
//! Bits are independent of each other.

use core::fmt;

use bitflags::bitflags;

use crate::bits;
use crate::err::{PlatformError, Result};
use crate::reg::RegisterAccess;
use crate::soc;

bitflags! {
    /// Presence masks for the `HW_FEATURES` register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HwFeatures: u32 {
        const BOOTROM = 1 << soc::HW_FEATURES_BOOTROM_BIT;
        const LLC = 1 << soc::HW_FEATURES_LLC_BIT;
        const UART = 1 << soc::HW_FEATURES_UART_BIT;
        const SPI_HOST = 1 << soc::HW_FEATURES_SPI_HOST_BIT;
        const I2C = 1 << soc::HW_FEATURES_I2C_BIT;
        const GPIO = 1 << soc::HW_FEATURES_GPIO_BIT;
        const DMA = 1 << soc::HW_FEATURES_DMA_BIT;
        const SERIAL_LINK = 1 << soc::HW_FEATURES_SERIAL_LINK_BIT;
        const VGA = 1 << soc::HW_FEATURES_VGA_BIT;
        const AXIRT = 1 << soc::HW_FEATURES_AXIRT_BIT;
        const CLIC = 1 << soc::HW_FEATURES_CLIC_BIT;
        const IRQ_ROUTER = 1 << soc::HW_FEATURES_IRQ_ROUTER_BIT;
        const BUS_ERR = 1 << soc::HW_FEATURES_BUS_ERR_BIT;
    }
}

// ============================================================================
// Named Features
// ============================================================================

/// Optional hardware features of the SoC.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    BootRom = soc::HW_FEATURES_BOOTROM_BIT,
    Llc = soc::HW_FEATURES_LLC_BIT,
    Uart = soc::HW_FEATURES_UART_BIT,
    SpiHost = soc::HW_FEATURES_SPI_HOST_BIT,
    I2c = soc::HW_FEATURES_I2C_BIT,
    Gpio = soc::HW_FEATURES_GPIO_BIT,
    Dma = soc::HW_FEATURES_DMA_BIT,
    SerialLink = soc::HW_FEATURES_SERIAL_LINK_BIT,
    Vga = soc::HW_FEATURES_VGA_BIT,
    AxiRt = soc::HW_FEATURES_AXIRT_BIT,
    Clic = soc::HW_FEATURES_CLIC_BIT,
    IrqRouter = soc::HW_FEATURES_IRQ_ROUTER_BIT,
    BusErr = soc::HW_FEATURES_BUS_ERR_BIT,
}

impl Feature {
    /// Every named feature, in bit order.
    pub const ALL: [Feature; 13] = [
        Feature::BootRom,
        Feature::Llc,
        Feature::Uart,
        Feature::SpiHost,
        Feature::I2c,
        Feature::Gpio,
        Feature::Dma,
        Feature::SerialLink,
        Feature::Vga,
        Feature::AxiRt,
        Feature::Clic,
        Feature::IrqRouter,
        Feature::BusErr,
    ];

    /// Bit position in `HW_FEATURES`.
    pub const fn bit_index(self) -> u32 {
        self as u32
    }

    pub const fn mask(self) -> HwFeatures {
        HwFeatures::from_bits_retain(bits::bit_mask(self.bit_index()))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Feature::BootRom => "bootrom",
            Feature::Llc => "llc",
            Feature::Uart => "uart",
            Feature::SpiHost => "spi_host",
            Feature::I2c => "i2c",
            Feature::Gpio => "gpio",
            Feature::Dma => "dma",
            Feature::SerialLink => "serial_link",
            Feature::Vga => "vga",
            Feature::AxiRt => "axirt",
            Feature::Clic => "clic",
            Feature::IrqRouter => "irq_router",
            Feature::BusErr => "bus_err",
        }
    }

    /// Look a feature up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Result<Feature> {
        Feature::ALL
            .iter()
            .copied()
            .find(|feature| feature.name() == name)
            .ok_or(PlatformError::UnknownFeature)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Descriptor Snapshot
// ============================================================================

/// One reading of the `HW_FEATURES` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    raw: u32,
}

impl FeatureDescriptor {
    /// Load the descriptor from the SoC control register block.
    ///
    /// Performs exactly one register read.
    pub fn read<R: RegisterAccess>(regs: &R) -> Self {
        Self::from_raw(regs.read32(soc::HW_FEATURES_REG_OFFSET))
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self { raw }
    }

    pub const fn raw(&self) -> u32 {
        self.raw
    }

    /// Value of bit `index`: `Ok(true)` when the bit is 1.
    pub const fn bit(&self, index: u32) -> Result<bool> {
        if index >= bits::REG_BITS {
            return Err(PlatformError::BitOutOfRange(index));
        }
        Ok(bits::is_bit_set(self.raw, index))
    }

    pub const fn is_present(&self, feature: Feature) -> bool {
        bits::is_bit_set(self.raw, feature.bit_index())
    }

    /// Descriptor as masks. Bits without a named feature are retained.
    pub const fn features(&self) -> HwFeatures {
        HwFeatures::from_bits_retain(self.raw)
    }

    /// Named features whose bit is set.
    pub fn present(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL
            .iter()
            .copied()
            .filter(move |feature| self.is_present(*feature))
    }
}

impl fmt::Display for FeatureDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x} [", self.raw)?;
        for (i, feature) in self.present().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(feature.name())?;
        }
        f.write_str("]")
    }
}
