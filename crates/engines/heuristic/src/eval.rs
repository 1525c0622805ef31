//! Positional evaluation: corner captivity, coin parity and mobility,
//! blended into one weighted score on a roughly [-100, +100] scale.

use reversi_core::{legal_moves_on, Board, Disc, Position, Square, TERMINAL_SCORE};

/// Blend weights for the deep-search evaluation.
const CORNER_WEIGHT: f64 = 0.7;
const MOBILITY_WEIGHT: f64 = 0.2;
const PARITY_WEIGHT: f64 = 0.1;

/// Each corner paired with its three adjacent squares. Holding an adjacent
/// square without the corner is a liability.
const CORNER_REGIONS: [(Square, [Square; 3]); 4] = [
    (
        Square { row: 1, col: 1 },
        [
            Square { row: 2, col: 1 },
            Square { row: 1, col: 2 },
            Square { row: 2, col: 2 },
        ],
    ),
    (
        Square { row: 8, col: 1 },
        [
            Square { row: 7, col: 1 },
            Square { row: 8, col: 2 },
            Square { row: 7, col: 2 },
        ],
    ),
    (
        Square { row: 1, col: 8 },
        [
            Square { row: 1, col: 7 },
            Square { row: 2, col: 7 },
            Square { row: 2, col: 8 },
        ],
    ),
    (
        Square { row: 8, col: 8 },
        [
            Square { row: 8, col: 7 },
            Square { row: 7, col: 7 },
            Square { row: 7, col: 8 },
        ],
    ),
];

/// +1 for the perspective side's disc, -1 for the opponent's, 0 for empty.
fn disc_value(disc: Option<&Disc>, perspective: Disc) -> f64 {
    match disc {
        None => 0.0,
        Some(&d) if d == perspective => 1.0,
        Some(_) => -1.0,
    }
}

/// Corner captivity score.
///
/// An occupied corner is worth +/-25 and its adjacent squares are then
/// ignored; around an empty corner each occupied adjacent square counts
/// against its owner (about 8.33 points each, rounded per corner).
pub fn corner_captivity(board: &Board, perspective: Disc) -> i32 {
    CORNER_REGIONS
        .iter()
        .map(|(corner, adjacents)| {
            let raw = match board.get(corner) {
                Some(&d) => 100.0 * disc_value(Some(&d), perspective),
                None => {
                    let occupied: f64 = adjacents
                        .iter()
                        .map(|sq| disc_value(board.get(sq), perspective))
                        .sum();
                    occupied * -33.33
                }
            };
            (raw * 0.25).round() as i32
        })
        .sum()
}

/// Coin parity: relative disc-count advantage. Defined as 0 on an empty
/// board rather than leaving the division unspecified.
pub fn coin_parity(board: &Board, perspective: Disc) -> f64 {
    if board.is_empty() {
        return 0.0;
    }
    let mine = board.values().filter(|&&d| d == perspective).count() as f64;
    let theirs = board.len() as f64 - mine;
    100.0 * (mine - theirs) / board.len() as f64
}

/// Mobility: relative legal-move advantage. Move counts are taken with the
/// opening phase off, since mobility is only meaningful post-opening.
pub fn mobility(board: &Board, perspective: Disc) -> f64 {
    let mine = legal_moves_on(board, perspective, false).len() as f64;
    let theirs = legal_moves_on(board, perspective.other(), false).len() as f64;
    if mine + theirs == 0.0 {
        0.0
    } else {
        100.0 * (mine - theirs) / (mine + theirs)
    }
}

/// Weighted blend of the three heuristics, used by the deep search tier.
pub fn blended(board: &Board, perspective: Disc) -> i32 {
    let score = CORNER_WEIGHT * corner_captivity(board, perspective) as f64
        + MOBILITY_WEIGHT * mobility(board, perspective)
        + PARITY_WEIGHT * coin_parity(board, perspective);
    score.round() as i32
}

/// Leaf value for the search, always from `perspective`'s point of view.
///
/// Terminal positions get the fixed win/loss magnitude. Otherwise the deep
/// tier uses the blended heuristic once the opening phase has ended; the
/// shallow tier (and any opening-phase leaf) uses the raw disc count.
pub fn leaf_value(pos: &Position, perspective: Disc, blend: bool) -> i32 {
    let score = pos.score();
    if pos.is_terminal() {
        return if score.for_side(perspective) > score.for_side(perspective.other()) {
            TERMINAL_SCORE
        } else {
            -TERMINAL_SCORE
        };
    }
    if blend && !pos.in_opening_phase() {
        blended(&pos.board, perspective)
    } else {
        score.for_side(perspective) as i32
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
