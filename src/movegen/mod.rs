//! Legal move detection.
//!
//! A move is legal iff its target cell is empty and at least one of the
//! eight rays from it captures: a run of one or more opponent tokens ending
//! in one of the mover's own tokens. The scan pass here never mutates the
//! board; flipping is done separately by the resolver once a move is
//! confirmed capturing.

use rand::Rng;

use crate::board::{Board, Cell, Direction, Player, DIRECTIONS};

/// Length of the capture run from (row, col) along one direction for the
/// given player: the number of opponent tokens strictly between (row, col)
/// and the nearest of the player's own tokens on that ray.
///
/// Returns 0 when the ray leaves the board or meets an empty cell before
/// reaching one of the player's tokens, and when the player's token is
/// immediately adjacent (nothing lies between to capture).
pub fn capture_length(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    dir: Direction,
) -> usize {
    let own = player.token();
    let other = player.opponent().token();

    let mut run = 0;
    let (mut r, mut c) = (row, col);
    loop {
        match board.step(r, c, dir) {
            None => return 0,
            Some(next) => {
                (r, c) = next;
            }
        }
        match board.get(r, c) {
            Cell::Empty => return 0,
            cell if cell == own => return run,
            cell => {
                debug_assert_eq!(cell, other);
                run += 1;
            }
        }
    }
}

/// Total number of tokens the player would capture by playing (row, col),
/// summed over all eight directions. 0 for an occupied target.
pub fn total_captures(board: &Board, player: Player, row: usize, col: usize) -> usize {
    if board.get(row, col) != Cell::Empty {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&dir| capture_length(board, player, row, col, dir))
        .sum()
}

/// True if playing (row, col) is legal for the player: the cell is empty
/// and at least one direction captures.
pub fn is_legal(board: &Board, player: Player, row: usize, col: usize) -> bool {
    total_captures(board, player, row, col) > 0
}

/// Enumerates every legal move for the player, row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<(usize, usize)> {
    board
        .coordinates()
        .filter(|&(row, col)| is_legal(board, player, row, col))
        .collect()
}

/// Picks a uniformly random legal move for the player, or None if the
/// player has no legal move.
pub fn random_move(board: &Board, player: Player, rng: &mut impl Rng) -> Option<(usize, usize)> {
    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.gen_range(0..moves.len())])
}
