//! Board grid representation.
//!
//! A square grid of cells in row-major order, sized at construction and
//! mutated in place by move resolution. Only the engine mutates the grid;
//! observers read snapshots between moves.

use super::cell::{Cell, Player};
use super::direction::Direction;

/// Default board side length.
pub const STANDARD_SIZE: usize = 8;

/// A square grid of cells, indexed (row, col), 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board of the given side length with the canonical opening
    /// pattern: the center 2x2 block holds White on the main diagonal and
    /// Black on the anti-diagonal; every other cell is empty.
    ///
    /// The side length must be even and at least 4.
    pub fn new(size: usize) -> Board {
        debug_assert!(size >= 4 && size % 2 == 0, "board size must be even and >= 4");

        let mut board = Board {
            size,
            cells: vec![Cell::Empty; size * size],
        };

        let mid = size / 2;
        board.set(mid - 1, mid - 1, Cell::White);
        board.set(mid - 1, mid, Cell::Black);
        board.set(mid, mid - 1, Cell::Black);
        board.set(mid, mid, Cell::White);
        board
    }

    /// Creates an entirely empty board. Used by the OFEN parser, which fills
    /// cells from the notation afterwards.
    pub fn empty(size: usize) -> Board {
        debug_assert!(size >= 4 && size % 2 == 0, "board size must be even and >= 4");
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at (row, col). Both must be within bounds.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    /// Sets the cell at (row, col). Both must be within bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col] = cell;
    }

    /// Steps from (row, col) along a direction, returning the next
    /// coordinate or None if it would leave the board.
    pub fn step(&self, row: usize, col: usize, dir: Direction) -> Option<(usize, usize)> {
        let r = row as i32 + dir.0;
        let c = col as i32 + dir.1;
        if r < 0 || c < 0 || r >= self.size as i32 || c >= self.size as i32 {
            return None;
        }
        Some((r as usize, c as usize))
    }

    /// Counts the tokens belonging to a player.
    pub fn count_tokens(&self, player: Player) -> u32 {
        let token = player.token();
        self.cells.iter().filter(|&&c| c == token).count() as u32
    }

    /// Counts all non-empty cells.
    pub fn count_occupied(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_token()).count() as u32
    }

    /// Iterates over all (row, col) coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(STANDARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_opening_pattern() {
        let board = Board::new(8);
        assert_eq!(board.size(), 8);
        assert_eq!(board.get(3, 3), Cell::White);
        assert_eq!(board.get(3, 4), Cell::Black);
        assert_eq!(board.get(4, 3), Cell::Black);
        assert_eq!(board.get(4, 4), Cell::White);
        assert_eq!(board.count_occupied(), 4);
        assert_eq!(board.count_tokens(Player::White), 2);
        assert_eq!(board.count_tokens(Player::Black), 2);
    }

    #[test]
    fn opening_pattern_scales_with_size() {
        for size in [4, 6, 10] {
            let board = Board::new(size);
            let mid = size / 2;
            assert_eq!(board.get(mid - 1, mid - 1), Cell::White);
            assert_eq!(board.get(mid, mid), Cell::White);
            assert_eq!(board.get(mid - 1, mid), Cell::Black);
            assert_eq!(board.get(mid, mid - 1), Cell::Black);
            assert_eq!(board.count_occupied(), 4);
        }
    }

    #[test]
    fn step_stays_in_bounds() {
        let board = Board::new(8);
        assert_eq!(board.step(0, 0, (-1, 0)), None);
        assert_eq!(board.step(0, 0, (0, -1)), None);
        assert_eq!(board.step(7, 7, (1, 1)), None);
        assert_eq!(board.step(3, 4, (1, -1)), Some((4, 3)));
    }

    #[test]
    fn coordinates_cover_every_cell() {
        let board = Board::new(4);
        let coords: Vec<_> = board.coordinates().collect();
        assert_eq!(coords.len(), 16);
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[15], (3, 3));
    }
}
