// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Bit Manipulation Utilities
//!
//! Single-bit helpers for 32-bit hardware registers. A set bit (1) is
//! always the asserted state; callers never invert polarity.

/// Number of bits in a 32-bit register.
pub const REG_BITS: u32 = u32::BITS;

/// Extract a single bit: `(value >> index) & 1`.
///
/// `index` must be below [`REG_BITS`].
#[inline]
pub const fn bit(value: u32, index: u32) -> u32 {
    (value >> index) & 1
}

/// Check if a bit is set
#[inline]
pub const fn is_bit_set(value: u32, index: u32) -> bool {
    bit(value, index) == 1
}

/// Mask with only bit `index` set.
#[inline]
pub const fn bit_mask(index: u32) -> u32 {
    1 << index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_extracts_lsb_after_shift() {
        assert_eq!(bit(0b100, 2), 1);
        assert_eq!(bit(0b100, 1), 0);
        assert_eq!(bit(0x8000_0000, 31), 1);
        assert_eq!(bit(0x7FFF_FFFF, 31), 0);
    }

    #[test]
    fn test_is_bit_set_polarity() {
        assert!(is_bit_set(0x0000_0001, 0));
        assert!(!is_bit_set(0x0000_0000, 0));
        assert!(!is_bit_set(0xFFFF_FFFE, 0));
        for index in 1..REG_BITS {
            assert!(is_bit_set(0xFFFF_FFFE, index));
        }
    }

    #[test]
    fn test_bit_mask_matches_is_bit_set() {
        for index in 0..REG_BITS {
            assert!(is_bit_set(bit_mask(index), index));
            assert_eq!(bit_mask(index).count_ones(), 1);
        }
    }
}
