use super::*;
use reversi_core::{Disc, Ruleset};

#[test]
fn human_tier_is_an_error_not_a_fallback() {
    let pos = Position::initial(Ruleset::Othello, Disc::Dark);
    let err = recommend_move(&pos, Difficulty::None, None).unwrap_err();
    assert_eq!(err, PolicyError::UnsupportedDifficulty(Difficulty::None));
}

#[test]
fn every_computer_tier_recommends_a_legal_move() {
    let pos = Position::initial(Ruleset::Othello, Disc::Dark);
    for difficulty in [
        Difficulty::Random,
        Difficulty::ShallowSearch,
        Difficulty::DeepHeuristicSearch,
    ] {
        let mv = recommend_move(&pos, difficulty, Some(9)).unwrap();
        assert!(pos.legal_moves.contains(&mv), "{difficulty:?}");
    }
}

#[test]
fn recommendations_are_deterministic_for_a_seed() {
    let pos = Position::initial(Ruleset::Othello, Disc::Dark);
    for difficulty in [
        Difficulty::Random,
        Difficulty::ShallowSearch,
        Difficulty::DeepHeuristicSearch,
    ] {
        let first = recommend_move(&pos, difficulty, Some(123)).unwrap();
        let second = recommend_move(&pos, difficulty, Some(123)).unwrap();
        assert_eq!(first, second, "{difficulty:?}");
    }
}

#[test]
fn terminal_position_has_no_recommendation() {
    let mut pos = Position::initial(Ruleset::Othello, Disc::Dark);
    pos.board.clear();
    pos.board
        .insert(reversi_core::Square::new(1, 1), Disc::Dark);
    pos.legal_moves = reversi_core::legal_moves_on(&pos.board, Disc::Dark, false);

    let err = recommend_move(&pos, Difficulty::ShallowSearch, None).unwrap_err();
    assert_eq!(err, PolicyError::NoMoveAvailable);
}

#[test]
fn classic_opening_recommendation_stays_in_center() {
    let pos = Position::initial(Ruleset::Classic, Disc::Dark);
    let mv = recommend_move(&pos, Difficulty::DeepHeuristicSearch, None).unwrap();
    assert!(reversi_core::CENTER_SQUARES.contains(&mv));
}
