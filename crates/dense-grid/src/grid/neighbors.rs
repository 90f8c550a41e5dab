//! Neighbor lookups and boundary classification.
//!
//! Out-of-range neighbors are dropped rather than padded or wrapped, so
//! boundary cells simply report fewer neighbors.
use crate::config::Neighborhood;
use crate::error::GridError;
use crate::grid::dense::Grid;
use crate::grid::types::{CellType, Position};

impl<T> Grid<T> {
    /// Values of the in-bounds cells at `offsets` from `position`, in offset
    /// order.
    fn collect_offsets(&self, position: Position, offsets: &[(isize, isize)]) -> Vec<&T> {
        offsets
            .iter()
            .filter_map(|&offset| position.offset(offset).and_then(|p| self.get(p)))
            .collect()
    }

    /// The 4-connected neighbors, in the order right, up, left, down.
    pub fn adjacent(&self, position: Position) -> Vec<&T> {
        self.neighborhood(position, Neighborhood::VonNeumann)
    }

    /// The 8-connected (Moore) neighbors, counter-clockwise starting from the
    /// right: right, up-right, up, up-left, left, down-left, down, down-right.
    pub fn neighbors(&self, position: Position) -> Vec<&T> {
        self.neighborhood(position, Neighborhood::Moore)
    }

    pub fn neighborhood(&self, position: Position, neighborhood: Neighborhood) -> Vec<&T> {
        self.collect_offsets(position, neighborhood.offsets())
    }

    /// Classify an in-bounds position as a corner, edge or interior cell.
    ///
    /// A cell is a corner when it sits on both a first/last row and a
    /// first/last column, so in a single-row or single-column grid only the
    /// two ends are corners.
    pub fn classify_cell(&self, position: Position) -> Result<CellType, GridError> {
        if !self.contains(position) {
            return Err(GridError::OutOfBounds {
                row: position.row,
                column: position.column,
                rows: self.rows(),
                columns: self.columns(),
            });
        }

        let max_row = self.rows() as isize - 1;
        let max_column = self.columns() as isize - 1;
        let Position { row, column } = position;

        if row > 0 && row < max_row && column > 0 && column < max_column {
            return Ok(CellType::Interior);
        }

        let row_extreme = row == 0 || row == max_row;
        let column_extreme = column == 0 || column == max_column;
        if row_extreme && column_extreme {
            Ok(CellType::Corner)
        } else {
            Ok(CellType::Edge)
        }
    }
}
