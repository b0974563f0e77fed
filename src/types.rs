use std::fmt;
use std::str::FromStr;

use crate::error::AttackError;

/// Algebraic names indexed by square. Row 0 is the top of the board (rank 8),
/// so `a8` is square 0 and `h1` is square 63.
#[rustfmt::skip]
pub const SQUARE_NAMES: [&str; 64] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn from_case(c: char) -> Result<Color, AttackError> {
        if c.is_ascii_uppercase() {
            Ok(Color::White)
        } else if c.is_ascii_lowercase() {
            Ok(Color::Black)
        } else {
            Err(AttackError::InvalidPieceChar(c))
        }
    }

    pub fn other_color(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Table index: white 0, black 1.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn to_human(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    const fn flag(self) -> u8 {
        match self {
            Color::White => Piece::WHITE_FLAG,
            Color::Black => Piece::BLACK_FLAG,
        }
    }
}

/// Piece kinds. The discriminants are the kind bits of a packed piece code.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum PieceType {
    King = 1,
    Queen = 2,
    Rook = 3,
    Bishop = 4,
    Knight = 5,
    Pawn = 6,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Pawn,
    ];

    pub fn from_char(c: char) -> Result<PieceType, AttackError> {
        match c.to_ascii_lowercase() {
            'k' => Ok(PieceType::King),
            'q' => Ok(PieceType::Queen),
            'r' => Ok(PieceType::Rook),
            'b' => Ok(PieceType::Bishop),
            'n' => Ok(PieceType::Knight),
            'p' => Ok(PieceType::Pawn),
            _ => Err(AttackError::InvalidPieceChar(c)),
        }
    }

    fn from_bits(bits: u8) -> Option<PieceType> {
        PieceType::ALL.into_iter().find(|kind| *kind as u8 == bits)
    }

    /// Is the piece a sliding piece (one which can move multiple square in a given direction)
    pub fn is_sliding(&self) -> bool {
        matches!(self, PieceType::Rook | PieceType::Bishop | PieceType::Queen)
    }

    pub fn to_human(&self) -> &'static str {
        match self {
            Self::King => "king",
            Self::Queen => "queen",
            Self::Rook => "rook",
            Self::Bishop => "bishop",
            Self::Knight => "knight",
            Self::Pawn => "pawn",
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Rook => 'R',
            Self::Bishop => 'B',
            Self::Knight => 'N',
            Self::Pawn => 'P',
        }
    }
}

/// A colored piece. Empty squares are `None` at every API that can see one.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: PieceType,
}

impl Piece {
    pub const WHITE_FLAG: u8 = 8;
    pub const BLACK_FLAG: u8 = 16;
    const KIND_BITS: u8 = 0b0_0111;
    const COLOR_BITS: u8 = Self::WHITE_FLAG | Self::BLACK_FLAG;

    pub fn new(color: Color, piece_type: PieceType) -> Self {
        Self { color, piece_type }
    }

    /// Uppercase is white, lowercase is black.
    pub fn from_char(c: char) -> Result<Piece, AttackError> {
        Ok(Piece {
            color: Color::from_case(c)?,
            piece_type: PieceType::from_char(c)?,
        })
    }

    pub fn to_char(&self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Packs kind and color into disjoint bit ranges, e.g. for a texture key.
    pub const fn code(&self) -> u8 {
        self.piece_type as u8 | self.color.flag()
    }

    /// Inverse of [`Piece::code`]. Code 0 is an empty square.
    pub fn from_code(code: u8) -> Result<Option<Piece>, AttackError> {
        if code == 0 {
            return Ok(None);
        }
        if code & !(Self::KIND_BITS | Self::COLOR_BITS) != 0 {
            return Err(AttackError::InvalidPieceCode(code));
        }
        let color = match code & Self::COLOR_BITS {
            Self::WHITE_FLAG => Color::White,
            Self::BLACK_FLAG => Color::Black,
            _ => return Err(AttackError::InvalidPieceCode(code)),
        };
        let piece_type =
            PieceType::from_bits(code & Self::KIND_BITS).ok_or(AttackError::InvalidPieceCode(code))?;
        Ok(Some(Piece { color, piece_type }))
    }
}

/// A board square, always in `0..64`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    pub fn new(index: u32) -> Result<Square, AttackError> {
        if index < Self::COUNT as u32 {
            Ok(Square(index as u8))
        } else {
            Err(AttackError::InvalidSquare(index))
        }
    }

    /// Callers guarantee `index < 64`.
    #[inline(always)]
    pub(crate) const fn from_index(index: usize) -> Square {
        debug_assert!(index < Self::COUNT);
        Square(index as u8)
    }

    /// Row 0 is rank 8, file 0 is the a-file.
    pub const fn from_row_file(row: u8, file: u8) -> Option<Square> {
        if row < 8 && file < 8 {
            Some(Square(row * 8 + file))
        } else {
            None
        }
    }

    pub fn from_algebraic(s: &str) -> Result<Square, AttackError> {
        let lowered = s.trim().to_ascii_lowercase();
        SQUARE_NAMES
            .iter()
            .position(|name| *name == lowered)
            .map(Square::from_index)
            .ok_or_else(|| AttackError::InvalidAlgebraic(s.to_string()))
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT).map(Square::from_index)
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    #[inline(always)]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    /// Single-bit bitboard for this square.
    #[inline(always)]
    pub const fn bb(self) -> u64 {
        1u64 << self.0
    }

    /// The square reached by rotating the board half a turn.
    pub const fn rotated(self) -> Square {
        Square(63 - self.0)
    }

    pub fn name(self) -> &'static str {
        SQUARE_NAMES[self.index()]
    }
}

impl TryFrom<u8> for Square {
    type Error = AttackError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index as u32)
    }
}

impl From<Square> for usize {
    fn from(sq: Square) -> usize {
        sq.index()
    }
}

impl FromStr for Square {
    type Err = AttackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
