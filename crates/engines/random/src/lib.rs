//! Random Move Reversi Engine
//!
//! Selects moves uniformly at random from the legal set. Serves as the easy
//! difficulty tier and as a baseline opponent for exercising the rules.
//!
//! The randomness source is an explicit engine field rather than a hidden
//! global, so seeded construction gives fully deterministic games.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use reversi_core::{Engine, Position, SearchLimits, SearchResult};


/// An engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    /// Engine seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Deterministic engine for reproducible games and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        self.nodes = 1;

        let best_move = pos.legal_moves.iter().copied().choose(&mut self.rng);

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
