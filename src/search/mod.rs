//! Search module for the Reversi engine
//!
//! Contains:
//! - Candidate-move nodes and the recursion-scoped buffer pool
//! - Phase-aware alpha-beta search with per-phase move ordering

pub mod alphabeta;
pub mod node;

pub use alphabeta::{Decision, Phase, SearchStats, Searcher};
pub use node::{Node, NodeList, NodePool};
