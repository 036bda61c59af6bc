//! Move resolution.
//!
//! Applies a candidate move to the game state: scan every direction for
//! capture runs first, and only touch the board once at least one run is
//! confirmed. A rejected move therefore leaves the state byte-identical,
//! with no rollback path.

use crate::board::{GameState, Player, DIRECTIONS};
use crate::movegen::capture_length;

/// Why a candidate move was rejected. The state is unchanged in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("target cell is already occupied")]
    Occupied,

    #[error("move captures no opponent tokens")]
    NoCapture,
}

/// Outcome of an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveApplied {
    /// The player who moved.
    pub player: Player,
    /// Total tokens flipped across all directions.
    pub flipped: u32,
}

/// Attempts a move at (row, col) for the side to move.
///
/// On success, flips every captured run, places the mover's token, credits
/// the mover with `flipped + 1`, debits the opponent `flipped`, and passes
/// the turn. On rejection nothing changes: the cell was occupied, or no
/// direction captured.
///
/// Both coordinates must be within the board (the protocol layer enforces
/// this for untrusted input).
pub fn attempt_move(
    state: &mut GameState,
    row: usize,
    col: usize,
) -> Result<MoveApplied, MoveError> {
    let size = state.board.size();
    debug_assert!(row < size && col < size);

    if state.board.get(row, col).is_token() {
        return Err(MoveError::Occupied);
    }

    let player = state.to_move;

    // Scan pass: measure every ray before mutating anything.
    let runs: [usize; 8] = std::array::from_fn(|i| {
        capture_length(&state.board, player, row, col, DIRECTIONS[i])
    });
    let flipped: usize = runs.iter().sum();
    if flipped == 0 {
        return Err(MoveError::NoCapture);
    }

    // Apply pass: flip each confirmed run, then place the new token.
    let own = player.token();
    for (i, &run) in runs.iter().enumerate() {
        let dir = DIRECTIONS[i];
        let (mut r, mut c) = (row, col);
        for _ in 0..run {
            (r, c) = state.board.step(r, c, dir).expect("run stays on the board");
            state.board.set(r, c, own);
        }
    }
    state.board.set(row, col, own);

    state.adjust_score(player, flipped as i64 + 1);
    state.adjust_score(player.opponent(), -(flipped as i64));
    state.to_move = player.opponent();

    Ok(MoveApplied {
        player,
        flipped: flipped as u32,
    })
}
