//! How the slider tables get their multipliers.

use crate::magic::DEFAULT_MAX_ATTEMPTS;

/// Where magic multipliers come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MagicSource {
    /// The constants in [`crate::magic_data`], validated while loading.
    Embedded,
    /// Caller-supplied constants, validated while loading.
    Custom {
        bishop: Box<[u64; 64]>,
        rook: Box<[u64; 64]>,
    },
    /// Random search, seeded from [`TableConfig::seed`].
    Search,
}

/// Settings for [`crate::tables::AttackTables::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub source: MagicSource,
    /// Seed for the search. Each (slider, square) pair derives its own stream.
    pub seed: u64,
    /// Candidates run through the fill check per square before giving up.
    pub max_attempts: u32,
    /// Build squares on the rayon pool.
    pub parallel: bool,
}

pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            source: MagicSource::Embedded,
            seed: DEFAULT_SEED,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            parallel: true,
        }
    }
}

impl TableConfig {
    /// Live search with the given seed.
    pub fn search(seed: u64) -> Self {
        TableConfig {
            source: MagicSource::Search,
            seed,
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: MagicSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
