pub mod types;
pub mod error;
pub mod bitboard;
pub mod leapers;
pub mod rays;
pub mod occupancy;
pub mod magic;
pub mod magic_data;
pub mod config;
pub mod tables;
pub mod logger;

pub use bitboard::Bitboard;
pub use config::{MagicSource, TableConfig};
pub use error::AttackError;
pub use rays::Slider;
pub use tables::AttackTables;
pub use types::{Color, Piece, PieceType, Square};
