//! Heuristic Reversi engine.
//!
//! Alpha-beta search over the game tree with two evaluation tiers: the
//! shallow tier scores leaves by raw disc count, the deep tier blends the
//! corner-captivity, mobility and coin-parity heuristics once the opening
//! phase has ended.

pub mod eval;
mod search;

use reversi_core::{Engine, Position, SearchLimits, SearchResult};

/// Alpha-beta engine with a configurable leaf evaluation.
#[derive(Debug, Clone, Default)]
pub struct HeuristicEngine {
    /// Use the blended positional heuristic at the leaves
    blend: bool,
    /// Node counter for statistics
    nodes: u64,
}

impl HeuristicEngine {
    /// Shallow tier: raw disc-count leaves, meant for small fixed depths.
    pub fn shallow() -> Self {
        Self {
            blend: false,
            nodes: 0,
        }
    }

    /// Deep tier: blended heuristic leaves.
    pub fn deep() -> Self {
        Self {
            blend: true,
            nodes: 0,
        }
    }
}

impl Engine for HeuristicEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        let outcome = search::pick_best_move(pos, limits, self.blend, &mut self.nodes);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        if self.blend {
            "Heuristic deep v1.0"
        } else {
            "Heuristic shallow v1.0"
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use eval::{blended, coin_parity, corner_captivity, mobility};
