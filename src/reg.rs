// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Register Access
//!
//! Memory-mapped register blocks are reached through the [`RegisterAccess`]
//! trait so that code touching hardware can run against a mock register
//! file on the host.
//!
//! | Type              | Backing                              |
//! |-------------------|--------------------------------------|
//! | [`MmioRegisters`] | Volatile loads/stores at `base + off` |
//! | `mock::MockRegisters` | In-memory register file (tests)  |

/// A block of 32-bit registers addressed by byte offset from its base.
pub trait RegisterAccess {
    /// Read the 32-bit register at `offset`.
    fn read32(&self, offset: usize) -> u32;

    /// Write `value` to the 32-bit register at `offset`.
    fn write32(&self, offset: usize, value: u32);

    /// Read-modify-write: set the bits in `mask`.
    #[inline]
    fn set_bits32(&self, offset: usize, mask: u32) {
        let value = self.read32(offset);
        self.write32(offset, value | mask);
    }

    /// Read-modify-write: clear the bits in `mask`.
    #[inline]
    fn clear_bits32(&self, offset: usize, mask: u32) {
        let value = self.read32(offset);
        self.write32(offset, value & !mask);
    }
}

impl<R: RegisterAccess + ?Sized> RegisterAccess for &R {
    #[inline]
    fn read32(&self, offset: usize) -> u32 {
        (**self).read32(offset)
    }

    #[inline]
    fn write32(&self, offset: usize, value: u32) {
        (**self).write32(offset, value)
    }
}

// ============================================================================
// MMIO
// ============================================================================

/// A register block mapped at a fixed physical address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MmioRegisters {
    base: usize,
}

impl MmioRegisters {
    /// Create an accessor for the register block at `base`.
    ///
    /// # Safety
    ///
    /// `base` must be the address of a mapped device register block, and
    /// every offset later passed to `read32`/`write32` must fall inside it
    /// and be 4-byte aligned.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Base address of the block.
    pub const fn base(&self) -> usize {
        self.base
    }
}

impl RegisterAccess for MmioRegisters {
    #[inline]
    fn read32(&self, offset: usize) -> u32 {
        // SAFETY: the constructor contract guarantees base + offset is a
        // mapped, aligned device register.
        unsafe { core::ptr::read_volatile((self.base + offset) as *const u32) }
    }

    #[inline]
    fn write32(&self, offset: usize, value: u32) {
        // SAFETY: see read32.
        unsafe { core::ptr::write_volatile((self.base + offset) as *mut u32, value) }
    }
}

// ============================================================================
// Mock register file
// ============================================================================


// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::mock::MockRegisters;
    use super::*;

    #[test]
    fn test_set_and_clear_bits() {
        let regs = MockRegisters::with(0x8, 0b1010);
        regs.set_bits32(0x8, 0b0101);
        assert_eq!(regs.peek(0x8), 0b1111);
        regs.clear_bits32(0x8, 0b0011);
        assert_eq!(regs.peek(0x8), 0b1100);
        assert_eq!(regs.reads_of(0x8), 2);
        assert_eq!(regs.writes_to(0x8), vec![0b1111, 0b1100]);
    }

    #[test]
    fn test_queued_reads_take_priority() {
        let regs = MockRegisters::with(0x14, 0x60);
        regs.queue_reads(0x14, &[0x00, 0x01]);
        assert_eq!(regs.read32(0x14), 0x00);
        assert_eq!(regs.read32(0x14), 0x01);
        assert_eq!(regs.read32(0x14), 0x60);
    }

    #[test]
    fn test_reference_forwards() {
        let regs = MockRegisters::new();
        let by_ref = &regs;
        by_ref.write32(0x4, 7);
        assert_eq!(by_ref.read32(0x4), 7);
        assert_eq!(regs.total_reads(), 1);
    }

    #[test]
    fn test_mmio_base() {
        let regs = unsafe { MmioRegisters::new(0x0300_0000) };
        assert_eq!(regs.base(), 0x0300_0000);
    }
}
