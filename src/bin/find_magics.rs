//! Searches magic multipliers for both sliders and prints them as Rust
//! constants, ready to paste into `src/magic_data.rs`.
//!
//! Usage: cargo run --release --bin find_magics -- --seed 42 -v

use std::time::Instant;

use clap::Parser;
use itertools::Itertools;

use chess_attacks::config::DEFAULT_SEED;
use chess_attacks::magic::DEFAULT_MAX_ATTEMPTS;
use chess_attacks::{logger, AttackTables, Slider, TableConfig};

#[derive(Parser, Debug)]
#[command(name = "find_magics")]
#[command(about = "Search magic multipliers for bishops and rooks")]
struct Args {
    /// Base seed, each (slider, square) derives its own stream from it
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Candidates per square before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: u32,

    /// Search one square at a time instead of on the rayon pool
    #[arg(long)]
    serial: bool,

    /// Log to stderr (-v info, -vv every square)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn constant(name: &str, magics: &[u64; 64]) -> String {
    let rows = magics
        .chunks(4)
        .map(|row| format!("    {},", row.iter().map(|m| format!("{m:#018x}")).join(", ")))
        .join("\n");
    format!("#[rustfmt::skip]\npub const {name}: [u64; 64] = [\n{rows}\n];")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logger::init(args.verbose)?;

    let config = TableConfig::search(args.seed)
        .with_max_attempts(args.attempts)
        .with_parallel(!args.serial);

    let start = Instant::now();
    let tables = AttackTables::init(&config)?;
    let elapsed = start.elapsed();

    println!("// Generated by find_magics at {}", chrono::Utc::now().to_rfc3339());
    println!("// seed {:#x}, {} attempts per square, {:?}", args.seed, args.attempts, elapsed);
    println!();
    println!("{}", constant("BISHOP_MAGICS", &tables.magics(Slider::Bishop)));
    println!();
    println!("{}", constant("ROOK_MAGICS", &tables.magics(Slider::Rook)));

    Ok(())
}
