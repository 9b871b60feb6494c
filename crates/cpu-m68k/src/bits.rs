//! Bit-manipulation primitives used by the status register model.

/// De Bruijn sequence B(2, 5).
///
/// Multiplying it by a power of two shifts a unique 5-bit pattern into the
/// top five bits, so a single-bit word can be identified with one multiply
/// and a table lookup.
const DE_BRUIJN: u32 = 0x077C_B531;

/// Bit index for each 5-bit pattern produced by `DE_BRUIJN << n`.
const DE_BRUIJN_INDEX: [u8; 32] = [
    0, 1, 28, 2, 29, 14, 24, 3, 30, 22, 20, 15, 25, 17, 4, 8, //
    31, 27, 13, 23, 21, 19, 16, 7, 26, 12, 18, 6, 11, 5, 10, 9,
];

/// Index of the lowest set bit of `word`, counting from bit 0.
///
/// Constant time. Returns `None` when no bit is set.
#[must_use]
pub const fn first_set_bit(word: u32) -> Option<u32> {
    if word == 0 {
        return None;
    }
    // Two's complement keeps only the lowest set bit.
    let lowest = word & word.wrapping_neg();
    let pattern = lowest.wrapping_mul(DE_BRUIJN) >> 27;
    Some(DE_BRUIJN_INDEX[pattern as usize] as u32)
}

/// Return `word` with bit `pos` forced to `bit`.
#[must_use]
pub const fn change_bit(word: u32, bit: bool, pos: u32) -> u32 {
    debug_assert!(pos < 32);
    (word & !(1 << pos)) | ((bit as u32) << pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_set_bit_of_every_power_of_two() {
        for pos in 0..32 {
            assert_eq!(first_set_bit(1 << pos), Some(pos), "bit {pos}");
        }
    }

    #[test]
    fn first_set_bit_ignores_higher_bits() {
        assert_eq!(first_set_bit(27), Some(0));
        assert_eq!(first_set_bit(0b1011_0000), Some(4));
        assert_eq!(first_set_bit(0xFFFF_0000), Some(16));
        assert_eq!(first_set_bit(0x8000_0000 | 0x0000_2000), Some(13));
        assert_eq!(first_set_bit(u32::MAX), Some(0));
    }

    #[test]
    fn first_set_bit_matches_trailing_zeros() {
        let mut word = 0x1234_5678_u32;
        for _ in 0..64 {
            assert_eq!(first_set_bit(word), Some(word.trailing_zeros()));
            word = word.rotate_left(7) ^ 0x9E37_79B9;
        }
    }

    #[test]
    fn zero_has_no_set_bit() {
        assert_eq!(first_set_bit(0), None);
    }

    #[test]
    fn change_bit_sets_and_clears() {
        assert_eq!(change_bit(0, true, 13), 0x2000);
        assert_eq!(change_bit(0x2000, false, 13), 0);
        assert_eq!(change_bit(0xFFFF, false, 0), 0xFFFE);
        assert_eq!(change_bit(0, true, 31), 0x8000_0000);
        // Already in the requested state.
        assert_eq!(change_bit(0x0010, true, 4), 0x0010);
        assert_eq!(change_bit(0x0010, false, 3), 0x0010);
    }
}
