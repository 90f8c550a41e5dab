use std::error::Error;
use std::fmt;

/// Errors raised by grid construction, classification and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Supplied cell data does not hold exactly `rows * columns` values.
    DimensionMismatch {
        rows: usize,
        columns: usize,
        len: usize,
    },
    /// A position lies outside `[0, rows) x [0, columns)`.
    OutOfBounds {
        row: isize,
        column: isize,
        rows: usize,
        columns: usize,
    },
    InvalidConfig(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::DimensionMismatch { rows, columns, len } => match rows.checked_mul(*columns) {
                Some(expected) => write!(
                    f,
                    "invalid dimensions ({}, {}) for {} cells, expected {}",
                    rows, columns, len, expected
                ),
                None => write!(
                    f,
                    "invalid dimensions ({}, {}) for {} cells, cell count overflows usize",
                    rows, columns, len
                ),
            },
            GridError::OutOfBounds {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "position ({}, {}) is outside a {}x{} grid",
                row, column, rows, columns
            ),
            GridError::InvalidConfig(msg) => write!(f, "invalid simulation config: {}", msg),
        }
    }
}

impl Error for GridError {}
