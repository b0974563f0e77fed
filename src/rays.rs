//! Ray geometry for the sliding pieces: relevance masks and the ray-walking
//! attack generator every lookup table is checked against.

use std::fmt;

use crate::bitboard::{pop_count, Bitboard};
use crate::types::{PieceType, Square};

/// The two sliders that get their own magic tables. Queens combine both.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    pub const ALL: [Slider; 2] = [Slider::Bishop, Slider::Rook];

    /// (row, file) steps, one per ray.
    pub const fn directions(self) -> [(i8, i8); 4] {
        match self {
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Reference relevant-bit counts per square.
    pub const fn declared_bits(self) -> &'static [u8; 64] {
        match self {
            Slider::Bishop => &BISHOP_RELEVANT_BITS,
            Slider::Rook => &ROOK_RELEVANT_BITS,
        }
    }

    pub fn piece_type(self) -> PieceType {
        match self {
            Slider::Bishop => PieceType::Bishop,
            Slider::Rook => PieceType::Rook,
        }
    }

    pub fn to_human(&self) -> &'static str {
        self.piece_type().to_human()
    }
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_human())
    }
}

/// Number of bits in the bishop relevance mask for each square
#[rustfmt::skip]
pub const BISHOP_RELEVANT_BITS: [u8; 64] = [
    6, 5, 5, 5, 5, 5, 5, 6,
    5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 7, 7, 7, 7, 5, 5,
    5, 5, 7, 9, 9, 7, 5, 5,
    5, 5, 7, 9, 9, 7, 5, 5,
    5, 5, 7, 7, 7, 7, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5,
    6, 5, 5, 5, 5, 5, 5, 6,
];

/// Number of bits in the rook relevance mask for each square
#[rustfmt::skip]
pub const ROOK_RELEVANT_BITS: [u8; 64] = [
    12, 11, 11, 11, 11, 11, 11, 12,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    12, 11, 11, 11, 11, 11, 11, 12,
];

#[inline(always)]
const fn on_board(row: i8, file: i8) -> bool {
    row >= 0 && row < 8 && file >= 0 && file < 8
}

/// Squares whose occupancy can change the slider's attacks from `sq`.
///
/// Each ray stops one square short of the edge: a piece on the last square
/// of a ray blocks nothing, since the ray ends there anyway.
pub const fn relevance_mask(slider: Slider, sq: Square) -> Bitboard {
    let row = sq.row() as i8;
    let file = sq.file() as i8;
    let directions = slider.directions();
    let mut mask = 0u64;

    let mut d = 0;
    while d < 4 {
        let (dr, df) = directions[d];
        let mut r = row + dr;
        let mut f = file + df;
        // the next step must still be on the board
        while on_board(r + dr, f + df) {
            mask |= 1u64 << (r * 8 + f);
            r += dr;
            f += df;
        }
        d += 1;
    }
    mask
}

#[inline]
pub const fn relevant_bits(slider: Slider, sq: Square) -> u32 {
    pop_count(relevance_mask(slider, sq))
}

/// Attacks of `slider` on `sq`, walking each ray until it leaves the board or
/// hits an occupied square. The blocker itself is attacked.
pub const fn ray_attacks(slider: Slider, sq: Square, occupancy: Bitboard) -> Bitboard {
    let row = sq.row() as i8;
    let file = sq.file() as i8;
    let directions = slider.directions();
    let mut attacks = 0u64;

    let mut d = 0;
    while d < 4 {
        let (dr, df) = directions[d];
        let mut r = row + dr;
        let mut f = file + df;
        while on_board(r, f) {
            let target = 1u64 << (r * 8 + f);
            attacks |= target;
            if occupancy & target != 0 {
                break;
            }
            r += dr;
            f += df;
        }
        d += 1;
    }
    attacks
}
