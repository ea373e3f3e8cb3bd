//! Reversi decision engine
//!
//! A bitboard engine for the 8x8 disk-flipping game: given a board snapshot
//! and the side to move it returns the best move together with search
//! statistics (value, reached depth, node count, time, throughput).
//!
//! # Architecture
//!
//! The engine is organized into a few modules:
//! - [`board`]: two-word bitboard with bit-parallel move generation, capture
//!   resolution, positional evaluation and mobility counting
//! - [`search`]: phase-aware alpha-beta search and the recursion-scoped
//!   candidate-list pool backing its move ordering
//! - [`engine`]: phase and depth selection, request orchestration, response
//!   formatting
//!
//! # Quick Start
//!
//! ```
//! use reversi::{BitBoard, Engine, Side, Strength};
//!
//! let board = BitBoard::parse(
//!     "+++++++++++++++++++++++++++OX++++++XO+++++++++++++++++++++++++++",
//! )
//! .unwrap();
//!
//! let engine = Engine::new(Side::Black, Strength::Weak);
//! let result = engine.compute_move(&board);
//! println!("{result}");
//! ```
//!
//! # Phases
//!
//! The midgame searches to a strength-dependent depth and scores leaves with
//! a fixed positional evaluation; once few enough cells remain the engine
//! switches to an exact endgame solve scored by the final disk differential.

pub mod board;
pub mod engine;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{BitBoard, Cell, ParseBoardError, Side, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{Engine, MoveResult, Strength};
pub use search::{Phase, SearchStats};
