use thiserror::Error;

use crate::rays::Slider;
use crate::types::Square;

/// Everything that can go wrong while building or addressing the attack tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttackError {
    #[error("square index {0} is outside 0..=63")]
    InvalidSquare(u32),

    #[error("`{0}` is not an algebraic square name")]
    InvalidAlgebraic(String),

    #[error("unrecognized piece character `{0}`")]
    InvalidPieceChar(char),

    #[error("piece code {0:#07b} does not encode exactly one kind and one color")]
    InvalidPieceCode(u8),

    /// The bounded search ran out of candidates. Tables cannot be built
    /// without a valid multiplier for every square.
    #[error("no {slider} magic found for {square} after {attempts} attempts")]
    MagicNotFound {
        slider: Slider,
        square: Square,
        attempts: u32,
    },

    /// A supplied multiplier maps two different attack sets onto one index.
    #[error("{slider} magic {magic:#018x} collides on {square}")]
    InvalidMagic {
        slider: Slider,
        square: Square,
        magic: u64,
    },
}
