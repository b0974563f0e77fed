//! The complete attack lookup for every piece, built once and then read-only.

use std::time::Instant;

use log::info;
use once_cell::sync::Lazy;

use crate::bitboard::Bitboard;
use crate::config::{MagicSource, TableConfig};
use crate::error::AttackError;
use crate::leapers::LeaperTables;
use crate::magic::MagicTable;
use crate::magic_data::{BISHOP_MAGICS, ROOK_MAGICS};
use crate::rays::Slider;
use crate::types::{Color, Square};

static SHARED: Lazy<Result<AttackTables, AttackError>> = Lazy::new(AttackTables::new);

/// Leaper tables plus one magic table per slider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackTables {
    leapers: LeaperTables,
    bishop: MagicTable,
    rook: MagicTable,
}

impl AttackTables {
    /// Builds every table according to `config`.
    pub fn init(config: &TableConfig) -> Result<Self, AttackError> {
        let start = Instant::now();
        let parallel = config.parallel;

        let (bishop, rook) = match &config.source {
            MagicSource::Embedded => (
                MagicTable::from_magics(Slider::Bishop, &BISHOP_MAGICS, parallel)?,
                MagicTable::from_magics(Slider::Rook, &ROOK_MAGICS, parallel)?,
            ),
            MagicSource::Custom { bishop, rook } => (
                MagicTable::from_magics(Slider::Bishop, bishop, parallel)?,
                MagicTable::from_magics(Slider::Rook, rook, parallel)?,
            ),
            MagicSource::Search => (
                MagicTable::search(Slider::Bishop, config.seed, config.max_attempts, parallel)?,
                MagicTable::search(Slider::Rook, config.seed, config.max_attempts, parallel)?,
            ),
        };

        info!(
            "attack tables ready from {} in {:.3}s ({} slider slots)",
            source_name(&config.source),
            start.elapsed().as_secs_f32(),
            bishop.table_size() + rook.table_size()
        );

        Ok(AttackTables {
            leapers: LeaperTables::new(),
            bishop,
            rook,
        })
    }

    /// Tables from the embedded multipliers.
    pub fn new() -> Result<Self, AttackError> {
        Self::init(&TableConfig::default())
    }

    /// Tables from a fresh search with `seed`.
    pub fn search(seed: u64) -> Result<Self, AttackError> {
        Self::init(&TableConfig::search(seed))
    }

    /// Process-wide instance from the embedded multipliers, built on first use.
    pub fn shared() -> Result<&'static AttackTables, AttackError> {
        SHARED.as_ref().map_err(Clone::clone)
    }

    #[inline(always)]
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        self.leapers.pawn_attacks(color, sq)
    }

    #[inline(always)]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.leapers.knight_attacks(sq)
    }

    #[inline(always)]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.leapers.king_attacks(sq)
    }

    #[inline(always)]
    pub fn bishop_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop.attacks(sq, occupancy)
    }

    #[inline(always)]
    pub fn rook_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.rook.attacks(sq, occupancy)
    }

    #[inline(always)]
    pub fn queen_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occupancy) | self.rook_attacks(sq, occupancy)
    }

    #[inline]
    pub fn slider_attacks(&self, slider: Slider, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.table(slider).attacks(sq, occupancy)
    }

    pub fn leapers(&self) -> &LeaperTables {
        &self.leapers
    }

    pub fn table(&self, slider: Slider) -> &MagicTable {
        match slider {
            Slider::Bishop => &self.bishop,
            Slider::Rook => &self.rook,
        }
    }

    /// Multipliers in use, for exporting a search result.
    pub fn magics(&self, slider: Slider) -> [u64; 64] {
        self.table(slider).magics()
    }
}

fn source_name(source: &MagicSource) -> &'static str {
    match source {
        MagicSource::Embedded => "embedded constants",
        MagicSource::Custom { .. } => "custom constants",
        MagicSource::Search => "search",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::from_squares;
    use crate::rays::ray_attacks;
    use pretty_assertions::assert_eq;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_embedded_lookups() {
        let tables = AttackTables::new().unwrap();
        let c5 = sq("c5");
        let occupancy = from_squares([c5, sq("d4")]);
        assert_eq!(
            tables.bishop_attacks(c5, occupancy),
            from_squares(["d4", "b4", "a3", "b6", "a7", "d6", "e7", "f8"].map(sq))
        );
        assert_eq!(tables.rook_attacks(sq("a1"), 0).count_ones(), 14);
        assert_eq!(tables.queen_attacks(sq("d4"), 0).count_ones(), 27);
        assert_eq!(tables.knight_attacks(sq("b1")), from_squares(["a3", "c3", "d2"].map(sq)));
        assert_eq!(tables.king_attacks(sq("e1")).count_ones(), 5);
        assert_eq!(tables.pawn_attacks(Color::Black, sq("d7")), from_squares(["c6", "e6"].map(sq)));
    }

    #[test]
    fn test_slider_attacks_dispatch() {
        let tables = AttackTables::new().unwrap();
        let occupancy = 0x0000_1824_0042_0000;
        for slider in Slider::ALL {
            for s in Square::all() {
                assert_eq!(
                    tables.slider_attacks(slider, s, occupancy),
                    ray_attacks(slider, s, occupancy),
                    "{slider} on {s}"
                );
            }
        }
    }

    #[test]
    fn test_magics_export_round_trips() {
        let tables = AttackTables::new().unwrap();
        assert_eq!(tables.magics(Slider::Bishop), BISHOP_MAGICS);
        assert_eq!(tables.magics(Slider::Rook), ROOK_MAGICS);

        let custom = TableConfig::default().with_source(MagicSource::Custom {
            bishop: Box::new(tables.magics(Slider::Bishop)),
            rook: Box::new(tables.magics(Slider::Rook)),
        });
        assert_eq!(AttackTables::init(&custom).unwrap(), tables);
    }

    #[test]
    fn test_bad_custom_constants() {
        let mut rook = ROOK_MAGICS;
        rook[63] = 1;
        let config = TableConfig::default().with_source(MagicSource::Custom {
            bishop: Box::new(BISHOP_MAGICS),
            rook: Box::new(rook),
        });
        assert_eq!(
            AttackTables::init(&config),
            Err(AttackError::InvalidMagic {
                slider: Slider::Rook,
                square: sq("h1"),
                magic: 1
            })
        );
    }

    #[test]
    fn test_search_with_no_attempts_fails() {
        let config = TableConfig::search(1).with_max_attempts(0);
        assert!(matches!(
            AttackTables::init(&config),
            Err(AttackError::MagicNotFound { attempts: 0, .. })
        ));
    }

    #[test]
    fn test_shared_instance() {
        let first = AttackTables::shared().unwrap();
        let second = AttackTables::shared().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.magics(Slider::Rook), ROOK_MAGICS);
    }

    #[test]
    fn test_tables_are_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AttackTables>();
    }
}
