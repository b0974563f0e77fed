//! Prints the attack set of one piece on one square.
//!
//! Usage: cargo run --release -- --piece bishop --square c5 --occupied d4

use clap::{Parser, ValueEnum};
use itertools::Itertools;

use chess_attacks::bitboard::{from_squares, render, BitboardIter};
use chess_attacks::{logger, AttackTables, Bitboard, Color, PieceType, Square, TableConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PieceArg {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl From<PieceArg> for PieceType {
    fn from(piece: PieceArg) -> Self {
        match piece {
            PieceArg::Pawn => PieceType::Pawn,
            PieceArg::Knight => PieceType::Knight,
            PieceArg::Bishop => PieceType::Bishop,
            PieceArg::Rook => PieceType::Rook,
            PieceArg::Queen => PieceType::Queen,
            PieceArg::King => PieceType::King,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    White,
    Black,
}

impl From<ColorArg> for Color {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::White => Color::White,
            ColorArg::Black => Color::Black,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "chess_attacks")]
#[command(about = "Show the squares a piece attacks")]
struct Args {
    /// Piece to place
    #[arg(short, long, value_enum)]
    piece: PieceArg,

    /// Square it stands on, e.g. "e4"
    #[arg(short, long)]
    square: Square,

    /// Side the piece belongs to (only pawns care)
    #[arg(short, long, value_enum, default_value_t = ColorArg::White)]
    color: ColorArg,

    /// Other occupied squares, comma separated
    #[arg(short, long, value_delimiter = ',')]
    occupied: Vec<Square>,

    /// Search fresh magics instead of loading the embedded ones
    #[arg(long)]
    search: bool,

    /// Seed for --search
    #[arg(long, default_value_t = chess_attacks::config::DEFAULT_SEED)]
    seed: u64,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn attacks(tables: &AttackTables, args: &Args, occupancy: Bitboard) -> Bitboard {
    let sq = args.square;
    match PieceType::from(args.piece) {
        PieceType::Pawn => tables.pawn_attacks(args.color.into(), sq),
        PieceType::Knight => tables.knight_attacks(sq),
        PieceType::King => tables.king_attacks(sq),
        PieceType::Bishop => tables.bishop_attacks(sq, occupancy),
        PieceType::Rook => tables.rook_attacks(sq, occupancy),
        PieceType::Queen => tables.queen_attacks(sq, occupancy),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logger::init(args.verbose)?;

    let config = if args.search {
        TableConfig::search(args.seed)
    } else {
        TableConfig::default()
    };
    let tables = AttackTables::init(&config)?;

    let occupancy = from_squares(args.occupied.iter().copied()) | args.square.bb();
    let attacked = attacks(&tables, &args, occupancy);

    println!("{}", render(attacked));
    println!("Bitboard: {}", attacked);
    println!("Squares:  {}", BitboardIter(attacked).join(" "));

    Ok(())
}
