//! Rules-level tests for the move engine.
//!
//! Exercises the externally observable contract: the opening position, both
//! rejection outcomes, capture resolution across one and several directions,
//! score conservation, and strict turn alternation.

use flipstone::board::{Cell, GameState, Player};
use flipstone::movegen::legal_moves;
use flipstone::protocol::ofen::parse_ofen;
use flipstone::resolve::{attempt_move, MoveError};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn opening_position_has_canonical_center() {
    let state = GameState::standard();

    let mut tokens = Vec::new();
    for (row, col) in state.board.coordinates() {
        let cell = state.board.get(row, col);
        if cell.is_token() {
            tokens.push((row, col, cell));
        }
    }
    assert_eq!(
        tokens,
        vec![
            (3, 3, Cell::White),
            (3, 4, Cell::Black),
            (4, 3, Cell::Black),
            (4, 4, Cell::White),
        ]
    );
    assert_eq!(state.score_white, 2);
    assert_eq!(state.score_black, 2);
    assert_eq!(state.to_move, Player::White);
}

#[test]
fn occupied_cells_reject_without_any_change() {
    let mut state = GameState::standard();
    let before = state.clone();

    for (row, col) in [(3, 3), (3, 4), (4, 3), (4, 4)] {
        assert_eq!(attempt_move(&mut state, row, col), Err(MoveError::Occupied));
        assert_eq!(state, before);
    }
}

#[test]
fn capture_free_cell_rejects_without_any_change() {
    let mut state = GameState::standard();
    let before = state.clone();

    assert_eq!(attempt_move(&mut state, 0, 0), Err(MoveError::NoCapture));
    assert_eq!(state, before);
}

#[test]
fn first_white_move_flips_one_black_token() {
    let mut state = GameState::standard();

    let applied = attempt_move(&mut state, 2, 4).unwrap();
    assert_eq!(applied.flipped, 1);

    assert_eq!(state.board.get(2, 4), Cell::White);
    assert_eq!(state.board.get(3, 4), Cell::White);
    assert_eq!(state.score_white, 4);
    assert_eq!(state.score_black, 1);
    assert_eq!(state.to_move, Player::Black);
}

#[test]
fn two_directions_flip_together() {
    // White to play (2,2): east captures (2,3) through (2,4)=White, south
    // captures (3,2) through (4,2)=White.
    let mut state = parse_ofen("8/8/3BW3/2B5/2W5/8/8/8 W").unwrap();
    assert_eq!(state.score_white, 2);
    assert_eq!(state.score_black, 2);

    let applied = attempt_move(&mut state, 2, 2).unwrap();
    assert_eq!(applied.flipped, 2);

    assert_eq!(state.board.get(2, 2), Cell::White);
    assert_eq!(state.board.get(2, 3), Cell::White);
    assert_eq!(state.board.get(3, 2), Cell::White);
    assert_eq!(state.score_white, 5);
    assert_eq!(state.score_black, 0);
    assert_eq!(state.to_move, Player::Black);
}

#[test]
fn long_runs_flip_every_intermediate_token() {
    let mut state = parse_ofen("8/8/8/WBBBB3/8/8/8/8 W").unwrap();

    let applied = attempt_move(&mut state, 3, 5).unwrap();
    assert_eq!(applied.flipped, 4);
    for col in 0..=5 {
        assert_eq!(state.board.get(3, col), Cell::White);
    }
    assert_eq!(state.score_white, 6);
    assert_eq!(state.score_black, 0);
}

#[test]
fn adjacent_own_token_alone_does_not_legalize() {
    // White's token at (3,4) sits right next to the target with no Black
    // run between, so the west ray captures nothing and the move fails.
    let mut state = parse_ofen("8/8/8/4W3/8/8/8/8 W").unwrap();
    let before = state.clone();
    assert_eq!(attempt_move(&mut state, 3, 5), Err(MoveError::NoCapture));
    assert_eq!(state, before);
}

#[test]
fn scores_conserve_over_random_games() {
    let mut rng = SmallRng::seed_from_u64(9001);

    for _ in 0..20 {
        let mut state = GameState::standard();
        loop {
            let moves = legal_moves(&state.board, state.to_move);
            if moves.is_empty() {
                break;
            }
            let (row, col) = moves[rng.gen_range(0..moves.len())];
            attempt_move(&mut state, row, col).unwrap();
            assert_eq!(
                state.score_white + state.score_black,
                state.board.count_occupied()
            );
        }
    }
}

#[test]
fn turns_alternate_strictly_across_applied_moves() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut state = GameState::standard();

    for _ in 0..12 {
        let moves = legal_moves(&state.board, state.to_move);
        if moves.is_empty() {
            break;
        }
        let mover = state.to_move;
        let (row, col) = moves[rng.gen_range(0..moves.len())];
        attempt_move(&mut state, row, col).unwrap();
        assert_eq!(state.to_move, mover.opponent());
    }
}

#[test]
fn rejections_never_advance_the_turn() {
    let mut state = GameState::standard();

    assert!(attempt_move(&mut state, 3, 3).is_err());
    assert!(attempt_move(&mut state, 0, 7).is_err());
    assert_eq!(state.to_move, Player::White);
}

#[test]
fn small_board_opening_move_applies() {
    let mut state = GameState::new(4);
    // White at (0,2): south ray through Black (1,2) into White (2,2).
    let applied = attempt_move(&mut state, 0, 2).unwrap();
    assert_eq!(applied.flipped, 1);
    assert_eq!(state.score_white, 4);
    assert_eq!(state.score_black, 1);
}
