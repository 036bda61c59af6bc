//! Cell and player types.
//!
//! A cell holds at most one token; a player owns tokens of a single color.
//! Both sides map to single-character OFEN abbreviations.

use std::fmt;

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    /// Returns the single-character OFEN abbreviation, or None for Empty
    /// (empty cells are encoded as run lengths, not characters).
    pub const fn ofen_char(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::White => Some('W'),
            Cell::Black => Some('B'),
        }
    }

    /// Parses a token cell from its OFEN abbreviation.
    pub fn from_ofen_char(c: char) -> Option<Cell> {
        match c {
            'W' => Some(Cell::White),
            'B' => Some(Cell::Black),
            _ => None,
        }
    }

    /// True if the cell holds a token of either color.
    pub const fn is_token(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

/// One of the two players. Exactly one is to move at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

/// Both players, in move order of the opening position.
pub const ALL_PLAYERS: [Player; 2] = [Player::White, Player::Black];

impl Player {
    /// The other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// The cell state of this player's tokens.
    pub const fn token(self) -> Cell {
        match self {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }

    /// Returns the single-character OFEN abbreviation.
    pub const fn ofen_char(self) -> char {
        match self {
            Player::White => 'W',
            Player::Black => 'B',
        }
    }

    /// Parses a player from its OFEN abbreviation.
    pub fn from_ofen_char(c: char) -> Option<Player> {
        match c {
            'W' => Some(Player::White),
            'B' => Some(Player::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involutive() {
        for p in ALL_PLAYERS {
            assert_eq!(p.opponent().opponent(), p);
            assert_ne!(p.opponent(), p);
        }
    }

    #[test]
    fn token_matches_color() {
        assert_eq!(Player::White.token(), Cell::White);
        assert_eq!(Player::Black.token(), Cell::Black);
        assert!(Cell::White.is_token());
        assert!(!Cell::Empty.is_token());
    }

    #[test]
    fn ofen_char_roundtrip() {
        for p in ALL_PLAYERS {
            assert_eq!(Player::from_ofen_char(p.ofen_char()), Some(p));
            assert_eq!(Cell::from_ofen_char(p.ofen_char()), Some(p.token()));
        }
        assert_eq!(Player::from_ofen_char('x'), None);
        assert_eq!(Cell::Empty.ofen_char(), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(Player::White.to_string(), "White");
        assert_eq!(Player::Black.to_string(), "Black");
    }
}
