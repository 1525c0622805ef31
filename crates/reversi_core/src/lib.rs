pub mod board;
pub mod rules;
pub mod types;

pub use board::{Position, TERMINAL_SCORE};
pub use rules::{flanked, is_legal, legal_moves_on, Board, DIRECTIONS};
pub use types::{Difficulty, Disc, Ruleset, Score, Square, BOARD_SIZE, CENTER_SQUARES};

// =============================================================================
// Engine trait, implemented by all move-selection engines (random, search)
// =============================================================================

/// Result of asking an engine for a move.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the position is terminal)
    pub best_move: Option<Square>,
    /// Evaluation of the chosen move from the engine's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes visited (for stats)
    pub nodes: u64,
}

/// Limits on how much work a search may do.
///
/// There is no time-based cutoff; searches are bounded by ply depth plus an
/// absolute node cap that guarantees termination even if the depth is
/// misconfigured.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Safety cap on total nodes visited, independent of `depth`
    pub node_cap: u64,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            node_cap: DEFAULT_NODE_CAP,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(2)
    }
}

/// Node budget applied when callers do not set one explicitly.
pub const DEFAULT_NODE_CAP: u64 = 1_000_000;

/// Trait all move-selection engines implement.
///
/// This is the seam between the rule engine and the policies that pick
/// moves, allowing the random baseline and the alpha-beta searchers to be
/// swapped behind one interface.
pub trait Engine: Send {
    /// Pick a move for `pos.side_to_move` within the given limits.
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Engine name for reporting.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
