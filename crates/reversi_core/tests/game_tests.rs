//! Whole-game invariant checks over seeded random playouts.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use reversi_core::{is_legal, Disc, Position, Ruleset, Square, BOARD_SIZE};

fn random_playout(ruleset: Ruleset, seed: u64) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::initial(ruleset, Disc::Dark);
    let mut history = vec![pos.clone()];
    while !pos.is_terminal() {
        let mv = *pos.legal_moves.iter().choose(&mut rng).unwrap();
        pos = pos.apply(mv);
        history.push(pos.clone());
    }
    history
}

#[test]
fn legal_moves_match_predicate_throughout_game() {
    for seed in 0..4 {
        for pos in random_playout(Ruleset::Othello, seed) {
            let opening = pos.in_opening_phase();
            for row in 1..=BOARD_SIZE {
                for col in 1..=BOARD_SIZE {
                    let sq = Square::new(row, col);
                    assert_eq!(
                        pos.legal_moves.contains(&sq),
                        is_legal(&pos.board, sq, pos.side_to_move, opening),
                        "predicate mismatch at {:?} on ply {}",
                        sq,
                        pos.ply
                    );
                }
            }
        }
    }
}

#[test]
fn disc_count_grows_by_one_per_ply() {
    for ruleset in [Ruleset::Othello, Ruleset::Classic] {
        for (ply, pos) in random_playout(ruleset, 7).iter().enumerate() {
            let seeded = if ruleset == Ruleset::Othello { 4 } else { 0 };
            assert_eq!(pos.score().total(), seeded + ply as u32);
            assert_eq!(pos.ply as usize, ply);
        }
    }
}

#[test]
fn every_board_square_stays_in_bounds() {
    for pos in random_playout(Ruleset::Classic, 11) {
        for sq in pos.board.keys() {
            assert!(sq.on_board());
        }
        for sq in &pos.legal_moves {
            assert!(sq.on_board());
            assert!(!pos.board.contains_key(sq));
        }
    }
}

#[test]
fn games_terminate_with_fixed_magnitude_evaluation() {
    for seed in [3, 19] {
        let history = random_playout(Ruleset::Othello, seed);
        let last = history.last().unwrap();
        assert!(last.is_terminal());
        assert!(
            last.evaluation == reversi_core::TERMINAL_SCORE
                || last.evaluation == -reversi_core::TERMINAL_SCORE
        );
    }
}

#[test]
fn classic_game_opens_in_center_block() {
    let history = random_playout(Ruleset::Classic, 5);
    for pos in history.iter().take(5) {
        for sq in pos.board.keys() {
            assert!((4..=5).contains(&sq.row) && (4..=5).contains(&sq.col));
        }
    }
}
