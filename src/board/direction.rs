//! The eight compass directions.
//!
//! Capture runs are scanned along straight rays; the full direction set is
//! fixed for the lifetime of the engine, so it lives in a const table rather
//! than being rebuilt per move.

/// A (row, col) step. Each component is -1, 0, or 1, never both 0.
pub type Direction = (i32, i32);

/// All eight compass offsets, row-major order.
pub const DIRECTIONS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
