//! The `Grid` container and the coordinate types it is addressed by.
//!
//! Storage is a single row-major `Vec<T>`; the cell at `(row, column)` lives
//! at flat offset `column + columns * row`.
pub mod dense;
pub mod indexing;
pub mod neighbors;
pub mod types;

pub use dense::Grid;
pub use indexing::{to_flat_index, to_position, MatrixIndices};
pub use types::{CellType, Dimensions, Position};
