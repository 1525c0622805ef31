//! Difficulty-tier dispatch: maps a [`Difficulty`] to a concrete engine and
//! search limits, and answers move recommendations for a position.

use std::fmt;

use heuristic_engine::HeuristicEngine;
use random_engine::RandomEngine;
use reversi_core::{Difficulty, Engine, Position, SearchLimits, Square};

/// Search depth for the shallow tier.
pub const SHALLOW_DEPTH: u8 = 2;
/// Default search depth for the deep heuristic tier.
pub const DEEP_DEPTH: u8 = 6;

/// Errors from the policy layer. An unsupported tier is surfaced rather
/// than silently substituted, since picking a different policy would be
/// user-visibly wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The difficulty has no computer policy (a human plays this side)
    UnsupportedDifficulty(Difficulty),
    /// The position is terminal; there is no move to recommend
    NoMoveAvailable,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::UnsupportedDifficulty(d) => {
                write!(f, "no move policy for difficulty {d:?}")
            }
            PolicyError::NoMoveAvailable => write!(f, "position has no legal moves"),
        }
    }
}

impl std::error::Error for PolicyError {}

/// Builds the engine for a difficulty tier. `seed` feeds the random tier's
/// RNG; None seeds it from entropy.
pub fn create_engine(
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<Box<dyn Engine>, PolicyError> {
    match difficulty {
        Difficulty::None => Err(PolicyError::UnsupportedDifficulty(difficulty)),
        Difficulty::Random => Ok(Box::new(match seed {
            Some(s) => RandomEngine::from_seed(s),
            None => RandomEngine::new(),
        })),
        Difficulty::ShallowSearch => Ok(Box::new(HeuristicEngine::shallow())),
        Difficulty::DeepHeuristicSearch => Ok(Box::new(HeuristicEngine::deep())),
    }
}

/// Search limits matching a difficulty tier.
pub fn search_limits(difficulty: Difficulty) -> SearchLimits {
    match difficulty {
        Difficulty::DeepHeuristicSearch => SearchLimits::depth(DEEP_DEPTH),
        _ => SearchLimits::depth(SHALLOW_DEPTH),
    }
}

/// Recommends a move for `pos.side_to_move` at the given difficulty.
///
/// Deterministic for a fixed seed: search tiers are deterministic by
/// construction, and the random tier derives its choice from `seed`.
pub fn recommend_move(
    pos: &Position,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<Square, PolicyError> {
    let mut engine = create_engine(difficulty, seed)?;
    let result = engine.search(pos, search_limits(difficulty));
    result.best_move.ok_or(PolicyError::NoMoveAvailable)
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod policy_tests;
