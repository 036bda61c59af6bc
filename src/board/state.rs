//! Game state representation.
//!
//! Holds the complete snapshot of an Othello game at a given point in time:
//! the grid, the side to move, and both running scores. Scores are kept
//! incrementally by move resolution; `score_white + score_black` always
//! equals the number of occupied cells.

use super::cell::Player;
use super::grid::{Board, STANDARD_SIZE};

/// Complete game state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// The player whose move is next.
    pub to_move: Player,
    pub score_white: u32,
    pub score_black: u32,
}

impl GameState {
    /// Creates the opening position for a board of the given side length.
    /// White moves first with scores at 2-2.
    ///
    /// The side length must be even and at least 4.
    pub fn new(size: usize) -> GameState {
        GameState {
            board: Board::new(size),
            to_move: Player::White,
            score_white: 2,
            score_black: 2,
        }
    }

    /// Creates the standard 8x8 opening position.
    pub fn standard() -> GameState {
        GameState::new(STANDARD_SIZE)
    }

    /// Builds a state around an arbitrary board, deriving both scores from
    /// the token counts on the grid.
    pub fn from_board(board: Board, to_move: Player) -> GameState {
        let score_white = board.count_tokens(Player::White);
        let score_black = board.count_tokens(Player::Black);
        GameState {
            board,
            to_move,
            score_white,
            score_black,
        }
    }

    /// Returns a player's score.
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::White => self.score_white,
            Player::Black => self.score_black,
        }
    }

    /// Adjusts a player's score by a signed delta.
    pub(crate) fn adjust_score(&mut self, player: Player, delta: i64) {
        let score = match player {
            Player::White => &mut self.score_white,
            Player::Black => &mut self.score_black,
        };
        *score = (*score as i64 + delta) as u32;
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::standard()
    }
}
