//! Magic bitboards for the sliding pieces.
//!
//! Each square has a multiplier that maps every relevant blocker arrangement
//! to a slot of a small table: `((occupancy & mask) * magic) >> shift`. Two
//! arrangements may share a slot only if they produce the same attacks.
//!
//! Multipliers are either found here by random search or loaded from
//! constants. Both paths go through the same fill check, so a table never
//! exists with a colliding multiplier.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::bitboard::Bitboard;
use crate::error::AttackError;
use crate::occupancy::Occupancies;
use crate::rays::{ray_attacks, relevance_mask, Slider};
use crate::types::Square;

/// Candidates run through the fill check per square before the search gives
/// up. Candidates dropped by the high-byte filter are not counted.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000_000;

/// Top byte of `mask * magic` must have at least this many bits set.
const MIN_HIGH_BITS: u32 = 6;

/// Raw draws allowed per counted attempt, so the loop ends even if the
/// high-byte filter never lets a candidate through.
const DRAWS_PER_ATTEMPT: u64 = 1024;

/// Everything a lookup on one square needs.
///
/// Only [`MagicEntry::from_magic`] and [`MagicEntry::search`] create entries,
/// so `attacks` always holds `1 << bits` slots and the multiplier never
/// collides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagicEntry {
    mask: Bitboard,
    bits: u32,
    magic: u64,
    shift: u32,
    attacks: Vec<Bitboard>,
}

impl MagicEntry {
    #[inline(always)]
    pub fn index(&self, occupancy: Bitboard) -> usize {
        ((occupancy & self.mask).wrapping_mul(self.magic) >> self.shift) as usize
    }

    #[inline(always)]
    pub fn attacks(&self, occupancy: Bitboard) -> Bitboard {
        self.attacks[self.index(occupancy)]
    }

    /// Relevant blocker squares.
    pub fn mask(&self) -> Bitboard {
        self.mask
    }

    /// Number of squares in the mask.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn magic(&self) -> u64 {
        self.magic
    }

    /// `64 - bits`
    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// Attack sets indexed by the magic hash.
    pub fn table(&self) -> &[Bitboard] {
        &self.attacks
    }

    /// Builds the entry for a known multiplier, rejecting it if it collides.
    pub fn from_magic(slider: Slider, sq: Square, magic: u64) -> Result<Self, AttackError> {
        let blockers = Blockers::new(slider, sq);
        let attacks = blockers
            .build(magic)
            .ok_or(AttackError::InvalidMagic { slider, square: sq, magic })?;
        Ok(blockers.into_entry(magic, attacks))
    }

    /// Samples sparse candidates from `rng` until one fills the table without
    /// a collision, or `max_attempts` candidates have gone through the fill
    /// check.
    pub fn search<R: Rng>(
        slider: Slider,
        sq: Square,
        rng: &mut R,
        max_attempts: u32,
    ) -> Result<Self, AttackError> {
        let blockers = Blockers::new(slider, sq);
        let mut table = vec![None; blockers.table_len()];
        let max_draws = u64::from(max_attempts).saturating_mul(DRAWS_PER_ATTEMPT);

        let mut attempts = 0u32;
        let mut draws = 0u64;
        while attempts < max_attempts && draws < max_draws {
            draws += 1;
            let candidate = sparse_random(rng);
            if (blockers.mask.wrapping_mul(candidate) >> 56).count_ones() < MIN_HIGH_BITS {
                continue;
            }
            attempts += 1;
            if blockers.try_fill(candidate, &mut table) {
                debug!("{slider} magic for {sq}: {candidate:#018x} after {attempts} attempts ({draws} draws)");
                let attacks = table.iter().map(|slot| slot.unwrap_or(0)).collect();
                return Ok(blockers.into_entry(candidate, attacks));
            }
        }

        Err(AttackError::MagicNotFound {
            slider,
            square: sq,
            attempts,
        })
    }
}

/// Every relevant occupancy of one square, paired with its true attacks.
struct Blockers {
    mask: Bitboard,
    bits: u32,
    occupancies: Vec<Bitboard>,
    attacks: Vec<Bitboard>,
}

impl Blockers {
    fn new(slider: Slider, sq: Square) -> Self {
        let mask = relevance_mask(slider, sq);
        let subsets = Occupancies::new(mask);
        let bits = subsets.bits();
        let occupancies: Vec<Bitboard> = subsets.collect();
        let attacks = occupancies
            .iter()
            .map(|&occupancy| ray_attacks(slider, sq, occupancy))
            .collect();
        Blockers {
            mask,
            bits,
            occupancies,
            attacks,
        }
    }

    fn table_len(&self) -> usize {
        1 << self.bits
    }

    /// Places every occupancy's attacks at its hashed slot. Fails as soon as a
    /// slot already holds a different attack set.
    fn try_fill(&self, magic: u64, table: &mut [Option<Bitboard>]) -> bool {
        table.fill(None);
        let shift = 64 - self.bits;
        for (&occupancy, &attack) in self.occupancies.iter().zip(&self.attacks) {
            let slot = &mut table[(occupancy.wrapping_mul(magic) >> shift) as usize];
            match *slot {
                None => *slot = Some(attack),
                Some(stored) if stored == attack => {}
                Some(_) => return false,
            }
        }
        true
    }

    fn build(&self, magic: u64) -> Option<Vec<Bitboard>> {
        let mut table = vec![None; self.table_len()];
        if !self.try_fill(magic, &mut table) {
            return None;
        }
        // slots no occupancy hashes to are never read
        Some(table.into_iter().map(|slot| slot.unwrap_or(0)).collect())
    }

    fn into_entry(self, magic: u64, attacks: Vec<Bitboard>) -> MagicEntry {
        MagicEntry {
            mask: self.mask,
            bits: self.bits,
            magic,
            shift: 64 - self.bits,
            attacks,
        }
    }
}

/// AND of three random words, leaving roughly one bit in eight set.
fn sparse_random<R: Rng>(rng: &mut R) -> u64 {
    rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>()
}

/// Independent, reproducible stream for one (slider, square) pair.
pub fn square_rng(seed: u64, slider: Slider, sq: Square) -> StdRng {
    let stream = (((slider.index() as u64) << 8) | sq.index() as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(seed ^ stream)
}

/// Magic entries for all 64 squares of one slider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagicTable {
    slider: Slider,
    entries: Vec<MagicEntry>,
}

impl MagicTable {
    /// Loads known multipliers, validating each one.
    pub fn from_magics(slider: Slider, magics: &[u64; 64], parallel: bool) -> Result<Self, AttackError> {
        let entries = build_entries(parallel, |sq| {
            MagicEntry::from_magic(slider, sq, magics[sq.index()]).map_err(|err| {
                warn!("rejecting {slider} magic {:#018x} for {sq}", magics[sq.index()]);
                err
            })
        })?;
        Ok(MagicTable { slider, entries })
    }

    /// Searches a multiplier for every square.
    pub fn search(slider: Slider, seed: u64, max_attempts: u32, parallel: bool) -> Result<Self, AttackError> {
        let entries = build_entries(parallel, |sq| {
            let mut rng = square_rng(seed, slider, sq);
            MagicEntry::search(slider, sq, &mut rng, max_attempts)
        })?;
        Ok(MagicTable { slider, entries })
    }

    #[inline(always)]
    pub fn attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.entries[sq.index()].attacks(occupancy)
    }

    pub fn entry(&self, sq: Square) -> &MagicEntry {
        &self.entries[sq.index()]
    }

    pub fn slider(&self) -> Slider {
        self.slider
    }

    pub fn magics(&self) -> [u64; 64] {
        std::array::from_fn(|i| self.entries[i].magic)
    }

    /// Total attack-set slots across all squares.
    pub fn table_size(&self) -> usize {
        self.entries.iter().map(|entry| entry.attacks.len()).sum()
    }
}

fn build_entries<F>(parallel: bool, build: F) -> Result<Vec<MagicEntry>, AttackError>
where
    F: Fn(Square) -> Result<MagicEntry, AttackError> + Send + Sync,
{
    if parallel {
        (0..Square::COUNT)
            .into_par_iter()
            .map(|i| build(Square::from_index(i)))
            .collect()
    } else {
        Square::all().map(&build).collect()
    }
}
