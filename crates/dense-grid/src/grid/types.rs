use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns of a grid.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of cells, `rows * columns`, or `None` when the product does not
    /// fit in a `usize`.
    pub fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Number of cells, `rows * columns`.
    ///
    /// # Panics
    ///
    /// Panics when the product overflows `usize`, the same way `Vec` reports
    /// a capacity overflow. Use [`Dimensions::checked_len`] for untrusted
    /// input.
    pub fn len(&self) -> usize {
        match self.checked_len() {
            Some(len) => len,
            None => panic!("grid dimensions {} overflow usize", self),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Both coordinates fall inside `[0, rows) x [0, columns)`.
    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.column >= 0
            && (position.row as usize) < self.rows
            && (position.column as usize) < self.columns
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((rows, columns): (usize, usize)) -> Self {
        Dimensions::new(rows, columns)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// A `(row, column)` address. May lie outside any particular grid.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: isize,
    pub column: isize,
}

impl Position {
    pub fn new(row: isize, column: isize) -> Self {
        Self { row, column }
    }

    /// The position shifted by a `(row, column)` offset, or `None` when
    /// either coordinate would leave the `isize` range.
    pub fn offset(&self, (d_row, d_column): (isize, isize)) -> Option<Position> {
        Some(Position::new(
            self.row.checked_add(d_row)?,
            self.column.checked_add(d_column)?,
        ))
    }
}

impl From<(isize, isize)> for Position {
    fn from((row, column): (isize, isize)) -> Self {
        Position::new(row, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Where a cell sits relative to the grid boundary.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    Corner,
    Edge,
    Interior,
}
