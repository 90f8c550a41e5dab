//! dense-grid: a fixed-size, row-major two-dimensional grid.
//!
//! The crate provides the `Grid<T>` container together with pure structural
//! transformations (map, indexed map, folds, `transform`), 4- and 8-neighbor
//! queries, boundary classification, and a small simulation driver that
//! threads grid state from one generation to the next.
//!
//! Rendering back-ends are kept out of the core: they consume the grid
//! through `for_each_cell` and the `Palette` capability in [`render`].
pub mod config;
pub mod error;
pub mod grid;
pub mod render;
pub mod simulation;

pub use config::{Neighborhood, SimulationConfig};
pub use error::GridError;
pub use grid::{to_flat_index, to_position, CellType, Dimensions, Grid, MatrixIndices, Position};
pub use render::{Color, Palette};
pub use simulation::{Rule, Simulation};
