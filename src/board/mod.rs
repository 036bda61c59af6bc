//! Board representation and game-state types.
//!
//! Contains the core data structures for cells, players, the grid, the
//! direction table, and the overall game state.

pub mod cell;
pub mod direction;
pub mod grid;
pub mod state;

pub use cell::{Cell, Player, ALL_PLAYERS};
pub use direction::{Direction, DIRECTIONS};
pub use grid::{Board, STANDARD_SIZE};
pub use state::GameState;
