//! Reversi engine CLI
//!
//! Reads one request per line from stdin — a 64-character board description
//! (`X` black, `O` white, `+` empty, row-major) followed by the side to move
//! (`1` black, anything else white) — and prints one response line per
//! request. A request can also be passed directly on the command line.
//!
//! Logs go to stderr so stdout stays a pure response stream. Malformed input
//! aborts processing; there is no partial result.

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use reversi::{BitBoard, Engine, Side, Strength};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrengthArg {
    Weak,
    Medium,
    Strong,
}

impl From<StrengthArg> for Strength {
    fn from(arg: StrengthArg) -> Self {
        match arg {
            StrengthArg::Weak => Strength::Weak,
            StrengthArg::Medium => Strength::Medium,
            StrengthArg::Strong => Strength::Strong,
        }
    }
}

/// Reversi decision engine: board in, move plus search statistics out.
#[derive(Debug, Parser)]
#[command(name = "reversi", version)]
struct Args {
    /// Engine strength tier
    #[arg(long, value_enum, default_value = "strong")]
    strength: StrengthArg,

    /// One-shot board description; without it requests are read from stdin
    board: Option<String>,

    /// Side to move for the one-shot request ("1" black, anything else white)
    side: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let strength = Strength::from(args.strength);

    match (args.board, args.side) {
        (Some(board), Some(side)) => respond(&board, &side, strength),
        (None, None) => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("reading request line")?;
                if line.trim().is_empty() {
                    continue;
                }
                let mut tokens = line.split_whitespace();
                let board = tokens.next().context("missing board description")?;
                let side = tokens.next().context("missing side to move")?;
                respond(board, side, strength)?;
            }
            Ok(())
        }
        _ => bail!("a one-shot request needs both BOARD and SIDE"),
    }
}

fn respond(board: &str, side: &str, strength: Strength) -> Result<()> {
    let bd = BitBoard::parse(board).context("malformed board description")?;
    let side = if side == "1" { Side::Black } else { Side::White };
    let engine = Engine::new(side, strength);
    println!("{}", engine.compute_move(&bd));
    Ok(())
}
