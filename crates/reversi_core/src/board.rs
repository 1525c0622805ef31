use crate::rules::{flanked, legal_moves_on, Board};
use crate::types::{Disc, Ruleset, Score, Square};
use std::collections::BTreeSet;

/// Score magnitude assigned to terminal positions. Terminal value is a
/// fixed win/loss amount, never a margin of discs.
pub const TERMINAL_SCORE: i32 = 100;

/// One immutable game position.
///
/// Legal moves are computed once at construction and never recomputed;
/// every move produces a fresh `Position` via [`Position::apply`]. The ply
/// count is explicit state so the Classic opening-phase constraint never
/// depends on hidden flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub ruleset: Ruleset,
    pub side_to_move: Disc,
    pub board: Board,
    pub legal_moves: BTreeSet<Square>,
    /// Evaluation from the perspective of the side that made the move
    /// leading here (not the side to move). 0 for initial positions.
    pub evaluation: i32,
    /// Discs placed so far.
    pub ply: u32,
}

impl Position {
    /// Starting position for the given ruleset.
    ///
    /// Othello seeds the four center squares criss-cross; Classic starts
    /// empty with the opening-phase constraint active.
    pub fn initial(ruleset: Ruleset, starting_side: Disc) -> Self {
        let mut board = Board::new();
        if ruleset == Ruleset::Othello {
            board.insert(Square::new(4, 4), Disc::Light);
            board.insert(Square::new(4, 5), Disc::Dark);
            board.insert(Square::new(5, 4), Disc::Dark);
            board.insert(Square::new(5, 5), Disc::Light);
        }
        let opening = ruleset == Ruleset::Classic;
        let legal_moves = legal_moves_on(&board, starting_side, opening);
        Position {
            ruleset,
            side_to_move: starting_side,
            board,
            legal_moves,
            evaluation: 0,
            ply: 0,
        }
    }

    /// Whether the Classic center-four constraint is still active.
    pub fn in_opening_phase(&self) -> bool {
        self.ruleset == Ruleset::Classic && self.ply < 4
    }

    /// A position whose side to move has no legal moves is terminal. There
    /// is no pass rule: the turn transfers even when the receiver cannot
    /// move, which ends the game.
    pub fn is_terminal(&self) -> bool {
        self.legal_moves.is_empty()
    }

    /// Disc counts for both sides.
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for disc in self.board.values() {
            match disc {
                Disc::Dark => score.dark += 1,
                Disc::Light => score.light += 1,
            }
        }
        score
    }

    /// Applies a move for `side_to_move`, returning the successor position.
    ///
    /// A square outside `legal_moves` is silently rejected: the input
    /// position is returned unchanged and callers detect the no-op by
    /// comparing positions.
    pub fn apply(&self, square: Square) -> Position {
        if !self.legal_moves.contains(&square) {
            return self.clone();
        }

        let mover = self.side_to_move;
        let mut board = self.board.clone();
        board.insert(square, mover);
        if !self.in_opening_phase() {
            for sq in flanked(&self.board, square, mover) {
                board.insert(sq, mover);
            }
        }

        let ply = self.ply + 1;
        let opening = self.ruleset == Ruleset::Classic && ply < 4;
        let opponent = mover.other();
        let legal_moves = legal_moves_on(&board, opponent, opening);

        let mut next = Position {
            ruleset: self.ruleset,
            side_to_move: opponent,
            board,
            legal_moves,
            evaluation: 0,
            ply,
        };
        next.evaluation = next.mover_utility(mover);
        next
    }

    /// Utility of this position for the side that just moved: a fixed
    /// win/loss score at terminal positions, the mover's raw disc count
    /// otherwise.
    fn mover_utility(&self, mover: Disc) -> i32 {
        let score = self.score();
        if self.is_terminal() {
            if score.for_side(mover) > score.for_side(mover.other()) {
                TERMINAL_SCORE
            } else {
                -TERMINAL_SCORE
            }
        } else {
            score.for_side(mover) as i32
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
