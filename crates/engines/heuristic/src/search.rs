//! Depth-limited minimax with alpha-beta pruning.
//!
//! The searcher maximizes on the root side's turns and minimizes on the
//! opponent's, always scoring from the root side's perspective. Ties at the
//! root keep the first best-scoring move encountered, and iteration over the
//! sorted legal-move set makes that choice deterministic.

use reversi_core::{Disc, Position, SearchLimits, Square};

use crate::eval::leaf_value;

const INF: i32 = i32::MAX / 2;

pub struct SearchOutcome {
    /// Best move with its score (None if the position is terminal)
    pub best_move: Option<(Square, i32)>,
}

/// Searches `pos` and returns the best move for `pos.side_to_move`.
///
/// `blend` selects the deep tier's blended heuristic at the leaves; without
/// it leaves are scored by raw disc count.
pub fn pick_best_move(
    pos: &Position,
    limits: SearchLimits,
    blend: bool,
    nodes: &mut u64,
) -> SearchOutcome {
    let root = pos.side_to_move;
    let mut best: Option<(Square, i32)> = None;
    let mut alpha = -INF;

    for &mv in &pos.legal_moves {
        let child = pos.apply(mv);
        *nodes += 1;
        let score = alpha_beta(
            &child,
            root,
            limits.depth.saturating_sub(1),
            alpha,
            INF,
            blend,
            nodes,
            limits.node_cap,
        );
        // Strict improvement only: the first move reaching the best score
        // is kept.
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
            alpha = alpha.max(score);
        }
    }

    SearchOutcome { best_move: best }
}

/// Recursive alpha-beta. Cuts off at terminal positions, at depth zero, or
/// once the absolute node budget is spent.
#[allow(clippy::too_many_arguments)]
fn alpha_beta(
    pos: &Position,
    root: Disc,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    blend: bool,
    nodes: &mut u64,
    node_cap: u64,
) -> i32 {
    if pos.is_terminal() || depth == 0 || *nodes >= node_cap {
        return leaf_value(pos, root, blend);
    }

    let maximizing = pos.side_to_move == root;
    let mut best = if maximizing { -INF } else { INF };

    for &mv in &pos.legal_moves {
        let child = pos.apply(mv);
        *nodes += 1;
        let score = alpha_beta(&child, root, depth - 1, alpha, beta, blend, nodes, node_cap);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
