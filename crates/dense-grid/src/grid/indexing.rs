//! Conversion between `(row, column)` positions and flat storage offsets.
use crate::grid::types::Position;

/// Flat offset of `position` in a row-major buffer with `columns` columns.
///
/// Defined for any input; the result is only a valid storage index once the
/// caller has checked the position against the grid's dimensions. Returns
/// `None` when the offset does not fit in an `isize`, including when
/// `columns` itself exceeds `isize::MAX`.
#[inline]
pub fn to_flat_index(columns: usize, position: Position) -> Option<isize> {
    let columns = isize::try_from(columns).ok()?;
    columns
        .checked_mul(position.row)?
        .checked_add(position.column)
}

/// Inverse of [`to_flat_index`].
///
/// The column is the non-negative remainder of `flat_index / columns`, so the
/// two functions stay inverse for negative offsets as well.
///
/// # Panics
///
/// Panics when `columns == 0`: a grid without columns has no flat index to
/// invert. Also panics when `columns > isize::MAX`, where the column of a
/// negative offset would not be representable.
#[inline]
pub fn to_position(columns: usize, flat_index: isize) -> Position {
    assert!(
        columns != 0,
        "cannot convert flat index {} with zero columns: division by zero",
        flat_index
    );
    let columns = match isize::try_from(columns) {
        Ok(columns) => columns,
        Err(_) => panic!("column count {} exceeds isize::MAX", columns),
    };
    Position::new(flat_index.div_euclid(columns), flat_index.rem_euclid(columns))
}

/// Every position of a grid, row by row, columns varying fastest.
#[derive(Debug, Clone)]
pub struct MatrixIndices {
    columns: usize,
    next: usize,
    end: usize,
}

impl MatrixIndices {
    /// Positions for a grid with `columns` columns holding `len` cells.
    pub(crate) fn new(columns: usize, len: usize) -> Self {
        Self {
            columns,
            next: 0,
            end: len,
        }
    }
}

impl Iterator for MatrixIndices {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let offset = self.next;
        self.next += 1;
        Some(Position::new(
            (offset / self.columns) as isize,
            (offset % self.columns) as isize,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MatrixIndices {}
