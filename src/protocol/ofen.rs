//! OFEN (Othello FEN) encoding and decoding.
//!
//! OFEN is a compact string notation for a full Othello position, inspired
//! by chess FEN. Rows are listed top to bottom, separated by `/`; within a
//! row, `W` and `B` are tokens and decimal digit runs count consecutive
//! empty cells. A space and the side to move (`W` or `B`) follow the rows.
//!
//! The standard opening is `8/8/8/3WB3/3BW3/8/8/8 W`.
//!
//! Scores are not encoded: they are recomputed from token counts on parse,
//! so a decoded state always satisfies the score invariant.

use crate::board::{Board, Cell, GameState, Player};

/// Errors that can occur during OFEN parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OfenError {
    #[error("expected '<rows> <player>', got '{0}'")]
    WrongFieldCount(String),

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error("invalid side-to-move character: '{0}'")]
    InvalidPlayer(String),

    #[error("board side must be even and at least 4, got {0}")]
    InvalidSize(usize),

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Encodes only the board rows, without the side to move.
pub fn encode_rows(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();

    for row in 0..size {
        if row > 0 {
            out.push('/');
        }
        let mut empty_run = 0;
        for col in 0..size {
            match board.get(row, col).ofen_char() {
                None => empty_run += 1,
                Some(c) => {
                    if empty_run > 0 {
                        out.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    out.push(c);
                }
            }
        }
        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
    }

    out
}

/// Encodes a full game state as an OFEN string.
pub fn encode_ofen(state: &GameState) -> String {
    format!(
        "{} {}",
        encode_rows(&state.board),
        state.to_move.ofen_char()
    )
}

/// Parses an OFEN string into a game state. The board size is derived from
/// the row count and must be square, even, and at least 4.
pub fn parse_ofen(ofen: &str) -> Result<GameState, OfenError> {
    let mut fields = ofen.split_whitespace();
    let (rows_field, player_field) = match (fields.next(), fields.next(), fields.next()) {
        (Some(rows), Some(player), None) => (rows, player),
        _ => return Err(OfenError::WrongFieldCount(ofen.to_string())),
    };

    let to_move = match player_field.chars().collect::<Vec<_>>().as_slice() {
        [c] => Player::from_ofen_char(*c)
            .ok_or_else(|| OfenError::InvalidPlayer(player_field.to_string()))?,
        _ => return Err(OfenError::InvalidPlayer(player_field.to_string())),
    };

    let rows: Vec<&str> = rows_field.split('/').collect();
    let size = rows.len();
    if size < 4 || size % 2 != 0 {
        return Err(OfenError::InvalidSize(size));
    }

    let mut board = Board::empty(size);
    for (row, row_text) in rows.iter().enumerate() {
        let mut col = 0;
        let mut digits = String::new();
        for c in row_text.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            if !digits.is_empty() {
                col += flush_empty_run(&digits)?;
                digits.clear();
            }
            let cell = Cell::from_ofen_char(c).ok_or(OfenError::InvalidCell(c))?;
            if col < size {
                board.set(row, col, cell);
            }
            col += 1;
        }
        if !digits.is_empty() {
            col += flush_empty_run(&digits)?;
        }
        if col != size {
            return Err(OfenError::RaggedRow {
                row,
                len: col,
                expected: size,
            });
        }
    }

    Ok(GameState::from_board(board, to_move))
}

/// Parses an accumulated digit run into an empty-cell count.
fn flush_empty_run(digits: &str) -> Result<usize, OfenError> {
    digits
        .parse::<usize>()
        .map_err(|_| OfenError::InvalidCell(digits.chars().next().unwrap_or('?')))
}
