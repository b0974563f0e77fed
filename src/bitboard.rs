//! Bitboard primitives.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the chess board.
//! Square indexing: a8 = 0, b8 = 1, ..., h8 = 7, a7 = 8, ..., h1 = 63
//! This corresponds to: square_index = row * 8 + file where row 0 is rank 8.

use crate::types::Square;

pub type Bitboard = u64;

pub const EMPTY: Bitboard = 0;

pub const FILE_A: Bitboard = 0x0101_0101_0101_0101;
pub const FILE_B: Bitboard = FILE_A << 1;
pub const FILE_G: Bitboard = FILE_A << 6;
pub const FILE_H: Bitboard = FILE_A << 7;

/// File masks, a-file first.
pub const FILES: [Bitboard; 8] = [
    FILE_A,
    FILE_A << 1,
    FILE_A << 2,
    FILE_A << 3,
    FILE_A << 4,
    FILE_A << 5,
    FILE_A << 6,
    FILE_A << 7,
];

/// Is `sq` set in `bb`
#[inline(always)]
pub const fn test_bit(bb: Bitboard, sq: Square) -> bool {
    (bb >> sq.index()) & 1 != 0
}

#[inline(always)]
pub const fn set_bit(bb: Bitboard, sq: Square) -> Bitboard {
    bb | sq.bb()
}

/// Clears `sq` if it is set. Clearing an empty square is a no-op.
#[inline(always)]
pub const fn clear_bit(bb: Bitboard, sq: Square) -> Bitboard {
    if test_bit(bb, sq) {
        bb ^ sq.bb()
    } else {
        bb
    }
}

/// Number of set bits, one iteration per bit.
#[inline]
pub const fn pop_count(mut bb: Bitboard) -> u32 {
    let mut count = 0;
    while bb != 0 {
        count += 1;
        bb &= bb - 1;
    }
    count
}

/// Lowest set square, or `None` for an empty board.
#[inline]
pub const fn lsb_index(bb: Bitboard) -> Option<Square> {
    if bb == 0 {
        return None;
    }
    // isolate the lowest bit, then count the zeros below it
    let lowest = bb & bb.wrapping_neg();
    Some(Square::from_index(pop_count(lowest - 1) as usize))
}

/// Removes and returns the lowest set square.
#[inline]
pub fn pop_lsb(bb: &mut Bitboard) -> Option<Square> {
    let sq = lsb_index(*bb)?;
    *bb = clear_bit(*bb, sq);
    Some(sq)
}

/// Iterate over set bits in a bitboard, returning squares
pub struct BitboardIter(pub Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let sq = Square::from_index(self.0.trailing_zeros() as usize);
            self.0 &= self.0 - 1; // Clear the lowest set bit
            Some(sq)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

/// Bitboard with every listed square set.
pub fn from_squares<I: IntoIterator<Item = Square>>(squares: I) -> Bitboard {
    squares.into_iter().fold(EMPTY, set_bit)
}

/// 8x8 grid of `0`/`1`, rank 8 on the first line.
pub fn render(bb: Bitboard) -> String {
    let mut out = String::with_capacity(72);
    for row in 0..8u8 {
        for file in 0..8u8 {
            let set = Square::from_row_file(row, file).is_some_and(|sq| test_bit(bb, sq));
            out.push(if set { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_set_and_clear() {
        let bb = set_bit(EMPTY, sq("e4"));
        assert!(test_bit(bb, sq("e4")));
        assert!(!test_bit(bb, sq("e5")));
        assert_eq!(clear_bit(bb, sq("e4")), EMPTY);
        // clearing twice, or clearing an unset bit, changes nothing
        assert_eq!(clear_bit(clear_bit(bb, sq("e4")), sq("e4")), EMPTY);
        assert_eq!(clear_bit(bb, sq("a1")), bb);
    }

    #[test]
    fn test_pop_count() {
        assert_eq!(pop_count(EMPTY), 0);
        assert_eq!(pop_count(u64::MAX), 64);
        assert_eq!(pop_count(FILE_A | FILE_H), 16);
        for bb in [0x8244_2800_2844_8201u64, 0xdead_beef, 1 << 63] {
            assert_eq!(pop_count(bb), bb.count_ones());
        }
    }

    #[test]
    fn test_lsb_index() {
        assert_eq!(lsb_index(EMPTY), None);
        assert_eq!(lsb_index(1), Some(sq("a8")));
        assert_eq!(lsb_index(1 << 63), Some(sq("h1")));
        assert_eq!(lsb_index(0b1011_0000), Some(sq("e8")));
        for bb in [0x10a_000a_1120u64, FILE_H, u64::MAX << 17] {
            assert_eq!(lsb_index(bb).map(Square::index), Some(bb.trailing_zeros() as usize));
        }
    }

    #[test]
    fn test_pop_lsb_drains() {
        let mut bb = from_squares([sq("c5"), sq("d4"), sq("h1")]);
        assert_eq!(pop_lsb(&mut bb), Some(sq("c5")));
        assert_eq!(pop_lsb(&mut bb), Some(sq("d4")));
        assert_eq!(pop_lsb(&mut bb), Some(sq("h1")));
        assert_eq!(pop_lsb(&mut bb), None);
    }

    #[test]
    fn test_bitboard_iter() {
        let bb = from_squares([sq("a8"), sq("h8"), sq("h1")]);
        let squares: Vec<usize> = BitboardIter(bb).map(Square::index).collect();
        assert_eq!(squares, vec![0, 7, 63]);
        assert_eq!(BitboardIter(bb).len(), 3);
    }

    #[test]
    fn test_files() {
        assert_eq!(FILES[0], FILE_A);
        assert_eq!(FILES[1], FILE_B);
        assert_eq!(FILES[6], FILE_G);
        assert_eq!(FILES[7], FILE_H);
        assert_eq!(FILES.iter().fold(0, |acc, f| acc | f), u64::MAX);
        assert!(test_bit(FILE_H, sq("h5")));
    }

    #[test]
    fn test_render() {
        let grid = render(from_squares([sq("a8"), sq("h1")]));
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "10000000");
        assert_eq!(lines[7], "00000001");
        assert_eq!(lines[3], "00000000");
    }
}
