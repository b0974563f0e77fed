//! Enumeration of every blocker arrangement inside a relevance mask.

use crate::bitboard::{pop_count, pop_lsb, set_bit, Bitboard};

/// The `index`-th subset of `mask`.
///
/// Bit `i` of `index` decides whether the `(i + 1)`-th lowest square of
/// `mask` is occupied, so indices `0..1 << bits` cover each subset exactly
/// once. `bits` must equal the number of squares in `mask`.
pub fn occupancy_from_index(index: usize, bits: u32, mask: Bitboard) -> Bitboard {
    debug_assert_eq!(pop_count(mask), bits, "mask {mask:#018x} does not have {bits} bits");

    let mut remaining = mask;
    let mut occupancy = 0u64;
    for i in 0..bits {
        let Some(sq) = pop_lsb(&mut remaining) else {
            break;
        };
        if index & (1 << i) != 0 {
            occupancy = set_bit(occupancy, sq);
        }
    }
    occupancy
}

/// All `1 << bits` subsets of a mask, in index order.
///
/// A mask with every square set has more subsets than a `usize` can count;
/// its length saturates at `usize::MAX`.
#[derive(Clone, Debug)]
pub struct Occupancies {
    mask: Bitboard,
    bits: u32,
    count: usize,
    next: usize,
}

impl Occupancies {
    pub fn new(mask: Bitboard) -> Self {
        let bits = pop_count(mask);
        Occupancies {
            mask,
            bits,
            count: 1usize.checked_shl(bits).unwrap_or(usize::MAX),
            next: 0,
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }
}

impl Iterator for Occupancies {
    type Item = Bitboard;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let occupancy = occupancy_from_index(self.next, self.bits, self.mask);
        self.next += 1;
        Some(occupancy)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Occupancies {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rays::{relevance_mask, Slider};
    use crate::types::Square;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_index_bits_pick_mask_squares_in_order() {
        let mask = 0b1010_0100u64; // squares 2, 5, 7
        assert_eq!(occupancy_from_index(0, 3, mask), 0);
        assert_eq!(occupancy_from_index(0b001, 3, mask), 1 << 2);
        assert_eq!(occupancy_from_index(0b010, 3, mask), 1 << 5);
        assert_eq!(occupancy_from_index(0b100, 3, mask), 1 << 7);
        assert_eq!(occupancy_from_index(0b111, 3, mask), mask);
    }

    #[test]
    fn test_enumeration_is_a_bijection() {
        for slider in Slider::ALL {
            for sq in [Square::new(0).unwrap(), Square::new(27).unwrap(), Square::new(63).unwrap()] {
                let mask = relevance_mask(slider, sq);
                let all: Vec<Bitboard> = Occupancies::new(mask).collect();
                assert_eq!(all.len(), 1 << mask.count_ones());
                assert!(all.iter().all(|occ| occ & !mask == 0));
                let distinct: HashSet<Bitboard> = all.iter().copied().collect();
                assert_eq!(distinct.len(), all.len(), "{slider} on {sq}");
            }
        }
    }

    #[test]
    fn test_empty_mask_has_one_subset() {
        let all: Vec<Bitboard> = Occupancies::new(0).collect();
        assert_eq!(all, vec![0]);
    }

    #[test]
    fn test_exact_size() {
        let mut it = Occupancies::new(0xF0);
        assert_eq!(it.len(), 16);
        it.next();
        assert_eq!(it.len(), 15);
        assert_eq!(it.bits(), 4);
    }

    #[test]
    fn test_full_board_mask() {
        let mut it = Occupancies::new(u64::MAX);
        assert_eq!(it.bits(), 64);
        assert_eq!(it.len(), usize::MAX);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.nth(2), Some(0b100));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not have")]
    fn test_count_mismatch_is_caught() {
        occupancy_from_index(1, 5, 0b111);
    }

    proptest! {
        #[test]
        fn prop_index_recovers_from_occupancy(mask in any::<u64>(), raw in any::<u64>()) {
            // keep the mask small enough for a usize index
            let mask = mask & 0x00FF_00FF_0000_0F0F;
            let bits = mask.count_ones();
            let index = (raw as usize) & ((1usize << bits) - 1);
            let occupancy = occupancy_from_index(index, bits, mask);
            prop_assert_eq!(occupancy & !mask, 0);
            prop_assert_eq!(occupancy.count_ones(), (index as u64).count_ones());
            // rebuild the index by walking the mask squares in order
            let mut rebuilt = 0usize;
            let mut m = mask;
            let mut i = 0;
            while m != 0 {
                let low = m & m.wrapping_neg();
                if occupancy & low != 0 {
                    rebuilt |= 1 << i;
                }
                m ^= low;
                i += 1;
            }
            prop_assert_eq!(rebuilt, index);
        }
    }
}
