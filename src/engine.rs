//! Main engine integrating board and search
//!
//! The engine is configured with the side it plays and a strength tier; for
//! every request it decides the game phase from the number of empty cells,
//! derives the search depth, runs the alpha-beta search and reports the move
//! together with search statistics. All per-request state (counters, buffer
//! pool) lives inside the call, so one engine value can serve any number of
//! independent requests.

use std::fmt;
use std::time::Instant;

use tracing::debug;

use crate::board::{BitBoard, Side};
use crate::search::{NodePool, Phase, Searcher};

/// Midgame search depth at the strongest tier.
const PHASE1_DEPTH: i32 = 10;
/// Empty-cell threshold for switching to the endgame solve at the strongest tier.
const PHASE2_EMPTIES: i32 = 20;

/// Reporting scale for midgame values: the largest absolute score the
/// ten-class positional evaluation can reach.
const TOTAL_VALUE: i32 = 13752;

/// Strength tier. The numeric level deepens the midgame search and delays
/// the switch to endgame play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Numeric level used by the phase and depth formulas.
    #[inline]
    pub fn level(self) -> i32 {
        match self {
            Strength::Weak => 0,
            Strength::Medium => 2,
            Strength::Strong => 4,
        }
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found; `None` when the engine side has to pass.
    pub best_move: Option<u8>,
    /// Raw search value: positional score in midgame, disk differential in
    /// endgame.
    pub value: i32,
    /// Phase the position was searched in.
    pub phase: Phase,
    /// Depth reached on the last-evaluated path.
    pub depth: i32,
    /// Nodes searched.
    pub nodes: u64,
    /// Wall-clock search time in seconds.
    pub time: f64,
}

impl MoveResult {
    /// Search throughput in nodes per second.
    #[must_use]
    pub fn nps(&self) -> f64 {
        self.nodes as f64 / self.time
    }
}

impl fmt::Display for MoveResult {
    /// One response line: `<col><row> { 'value': ..., 'depth': ...,
    /// 'nodes': ..., 'time': ..., 'NPS': ... }`.
    ///
    /// Midgame values are normalized by the evaluation scale and printed
    /// with an explicit sign; endgame values are the signed disk
    /// differential. A root pass prints `PASS` in the coordinate field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.best_move {
            Some(loc) => write!(f, "{}{}", loc % 8, loc / 8)?,
            None => f.write_str("PASS")?,
        }
        match self.phase {
            Phase::Midgame => write!(
                f,
                " {{ 'value': {:+.2}, 'depth': {}, 'nodes': {}, 'time': {:.4}, 'NPS': {:.0} }}",
                f64::from(self.value) / f64::from(TOTAL_VALUE),
                self.depth,
                self.nodes,
                self.time,
                self.nps(),
            ),
            Phase::Endgame => write!(
                f,
                " {{ 'value': {:+}, 'depth': {}, 'nodes': {}, 'time': {:.4}, 'NPS': {:.0} }}",
                self.value,
                self.depth,
                self.nodes,
                self.time,
                self.nps(),
            ),
        }
    }
}

/// Decision engine for one side.
pub struct Engine {
    side: Side,
    opponent: Side,
    strength: Strength,
}

impl Engine {
    #[must_use]
    pub fn new(side: Side, strength: Strength) -> Self {
        Self {
            side,
            opponent: side.opponent(),
            strength,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn opponent(&self) -> Side {
        self.opponent
    }

    #[inline]
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Midgame while more cells are empty than the strength-adjusted
    /// threshold, endgame solve afterwards.
    fn phase_of(&self, bd: &BitBoard) -> Phase {
        let threshold = PHASE2_EMPTIES + (self.strength.level() - 4) * 4;
        if bd.empty_count() as i32 > threshold {
            Phase::Midgame
        } else {
            Phase::Endgame
        }
    }

    /// Remaining-depth budget for the phase. The endgame budget is
    /// effectively unbounded: the search reaches true terminal positions
    /// long before it could run out.
    fn depth_for(&self, phase: Phase) -> i32 {
        match phase {
            Phase::Midgame => (PHASE1_DEPTH + (self.strength.level() - 4) * 2).max(1),
            Phase::Endgame => i32::MAX,
        }
    }

    /// Pick the best move for the engine side on `bd`.
    #[must_use]
    pub fn compute_move(&self, bd: &BitBoard) -> MoveResult {
        let phase = self.phase_of(bd);
        let depth = self.depth_for(phase);
        debug!(
            side = self.side.name(),
            ?phase,
            depth,
            empties = bd.empty_count(),
            "searching"
        );

        let pool = NodePool::new();
        let mut searcher = Searcher::new(self.side, phase, depth);
        let start = Instant::now();
        let decision = searcher.search(&pool, *bd);
        let time = start.elapsed().as_secs_f64();

        let stats = searcher.stats();
        debug!(
            nodes = stats.nodes,
            reached_depth = stats.reached_depth,
            value = decision.value,
            "search finished"
        );

        MoveResult {
            best_move: decision.loc,
            value: decision.value,
            phase,
            depth: stats.reached_depth,
            nodes: stats.nodes,
            time,
        }
    }
}
