//! Attack tables for pieces that jump to a fixed set of squares.
//!
//! Every table entry is built by shifting the piece's single-bit board and
//! masking away the files a shift would wrap onto.

use crate::bitboard::{Bitboard, FILE_A, FILE_B, FILE_G, FILE_H};
use crate::types::{Color, Square};

const NOT_A: Bitboard = !FILE_A;
const NOT_H: Bitboard = !FILE_H;
const NOT_AB: Bitboard = !(FILE_A | FILE_B);
const NOT_GH: Bitboard = !(FILE_G | FILE_H);

/// Squares attacked by a pawn of `color` standing on square index `sq`.
/// White pawns advance toward row 0 (rank 8).
pub const fn pawn_mask(color: Color, sq: usize) -> Bitboard {
    let bb = 1u64 << sq;
    match color {
        Color::White => ((bb >> 7) & NOT_A) | ((bb >> 9) & NOT_H),
        Color::Black => ((bb << 7) & NOT_H) | ((bb << 9) & NOT_A),
    }
}

pub const fn knight_mask(sq: usize) -> Bitboard {
    let bb = 1u64 << sq;
    ((bb >> 17) & NOT_H)
        | ((bb >> 15) & NOT_A)
        | ((bb >> 10) & NOT_GH)
        | ((bb >> 6) & NOT_AB)
        | ((bb << 17) & NOT_A)
        | ((bb << 15) & NOT_H)
        | ((bb << 10) & NOT_AB)
        | ((bb << 6) & NOT_GH)
}

pub const fn king_mask(sq: usize) -> Bitboard {
    let bb = 1u64 << sq;
    ((bb >> 7) & NOT_A)
        | (bb >> 8)
        | ((bb >> 9) & NOT_H)
        | ((bb >> 1) & NOT_H)
        | ((bb << 7) & NOT_H)
        | (bb << 8)
        | ((bb << 9) & NOT_A)
        | ((bb << 1) & NOT_A)
}

/// Precomputed leaper attack tables
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaperTables {
    /// Pawn attacks for each color and square: pawn[color.index()][square]
    pub pawn: [[Bitboard; 64]; 2],
    /// Knight attacks for each square
    pub knight: [Bitboard; 64],
    /// King attacks for each square
    pub king: [Bitboard; 64],
}

impl LeaperTables {
    /// Builds all leaper tables. Usable in a `const` context.
    pub const fn new() -> Self {
        let mut pawn = [[0u64; 64]; 2];
        let mut knight = [0u64; 64];
        let mut king = [0u64; 64];

        let mut sq = 0;
        while sq < 64 {
            pawn[Color::White.index()][sq] = pawn_mask(Color::White, sq);
            pawn[Color::Black.index()][sq] = pawn_mask(Color::Black, sq);
            knight[sq] = knight_mask(sq);
            king[sq] = king_mask(sq);
            sq += 1;
        }

        LeaperTables { pawn, knight, king }
    }

    #[inline(always)]
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        self.pawn[color.index()][sq.index()]
    }

    #[inline(always)]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.knight[sq.index()]
    }

    #[inline(always)]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.king[sq.index()]
    }
}

impl Default for LeaperTables {
    fn default() -> Self {
        Self::new()
    }
}
