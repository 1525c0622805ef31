//! Legality and flanking rules over the sparse board.
//!
//! Everything here is a pure function of (board, square, side); the
//! opening-phase constraint is an explicit parameter rather than state
//! carried on a game object.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Disc, Square, BOARD_SIZE, CENTER_SQUARES};

/// Sparse board: absent key = empty cell.
pub type Board = BTreeMap<Square, Disc>;

/// The 8 compass directions as (dr, dc) steps.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Checks whether `side` may place a disc at `square`.
///
/// During the opening phase (Classic rules, first four plies) a move is
/// legal iff the square is one of the unoccupied center four. Otherwise it
/// must be unoccupied and flank at least one opponent disc.
pub fn is_legal(board: &Board, square: Square, side: Disc, opening: bool) -> bool {
    if !square.on_board() || board.contains_key(&square) {
        return false;
    }
    if opening {
        return CENTER_SQUARES.contains(&square);
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| flanks_in_direction(board, square, side, dr, dc))
}

/// Walks outward from `square` in (dr, dc) looking for a run of one or more
/// opponent discs terminated by a `side` disc.
fn flanks_in_direction(board: &Board, square: Square, side: Disc, dr: i8, dc: i8) -> bool {
    let mut cursor = square.step(dr, dc);
    let mut found_opponent = false;
    while let Some(sq) = cursor {
        match board.get(&sq) {
            None => return false,
            Some(&d) if d == side => return found_opponent,
            Some(_) => {
                found_opponent = true;
                cursor = sq.step(dr, dc);
            }
        }
    }
    // Ran off the board edge: the run dead-ends.
    false
}

/// All opponent squares captured by placing a `side` disc at `square`.
///
/// Per direction the opponent run is collected and committed only when it is
/// terminated by a same-side disc; runs ending at the board edge or an empty
/// cell are discarded.
pub fn flanked(board: &Board, square: Square, side: Disc) -> Vec<Square> {
    let mut captured = Vec::new();
    for &(dr, dc) in &DIRECTIONS {
        let mut run = Vec::new();
        let mut cursor = square.step(dr, dc);
        while let Some(sq) = cursor {
            match board.get(&sq) {
                None => {
                    run.clear();
                    break;
                }
                Some(&d) if d == side => break,
                Some(_) => {
                    run.push(sq);
                    cursor = sq.step(dr, dc);
                }
            }
        }
        if cursor.is_none() {
            // Edge-terminated run; nothing bracketed it.
            run.clear();
        }
        captured.extend(run);
    }
    captured
}

/// The full legal-move set for `side`. The mobility heuristic calls this
/// with `opening = false` since mobility is only meaningful post-opening.
pub fn legal_moves_on(board: &Board, side: Disc, opening: bool) -> BTreeSet<Square> {
    let mut moves = BTreeSet::new();
    for row in 1..=BOARD_SIZE {
        for col in 1..=BOARD_SIZE {
            let sq = Square::new(row, col);
            if is_legal(board, sq, side, opening) {
                moves.insert(sq);
            }
        }
    }
    moves
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
