use std::fmt;
use std::ops::Index;

use log::debug;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::indexing::MatrixIndices;
use crate::grid::types::{Dimensions, Position};

/// A fixed-size rectangular grid of cells stored in row-major order.
///
/// `cells.len() == dimensions.len()` holds for every `Grid` that exists,
/// including ones produced by deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawGrid<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Grid<T> {
    dimensions: Dimensions,
    cells: Vec<T>,
}

#[derive(Deserialize)]
struct RawGrid<T> {
    dimensions: Dimensions,
    cells: Vec<T>,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        Grid::from_list(raw.dimensions, raw.cells)
    }
}

impl<T> Grid<T> {
    /// A `0x0` grid.
    pub fn empty() -> Self {
        Self {
            dimensions: Dimensions::new(0, 0),
            cells: Vec::new(),
        }
    }

    /// Wrap `cells` as row-major storage.
    ///
    /// Fails with `DimensionMismatch` unless `cells.len() == rows * columns`,
    /// including when `rows * columns` overflows `usize`.
    pub fn from_list(dimensions: Dimensions, cells: Vec<T>) -> Result<Self, GridError> {
        if dimensions.checked_len() != Some(cells.len()) {
            debug!(
                "Rejecting {} cells for a {} grid (expected {:?})",
                cells.len(),
                dimensions,
                dimensions.checked_len()
            );
            return Err(GridError::DimensionMismatch {
                rows: dimensions.rows,
                columns: dimensions.columns,
                len: cells.len(),
            });
        }
        Ok(Self { dimensions, cells })
    }

    /// Build a grid by calling `f(row, column)` for every cell.
    ///
    /// `f` is called exactly once per cell in row-major order (ascending flat
    /// index), so side effects inside `f` are observed in that order.
    ///
    /// # Panics
    ///
    /// Panics when `rows * columns` overflows `usize`.
    pub fn initialize<F>(dimensions: Dimensions, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(dimensions.len());
        for row in 0..dimensions.rows {
            for column in 0..dimensions.columns {
                cells.push(f(row, column));
            }
        }
        Self { dimensions, cells }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// The flat row-major list accepted back by [`Grid::from_list`].
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.cells.clone()
    }

    /// One row as a slice, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows() {
            return None;
        }
        let start = row * self.columns();
        Some(&self.cells[start..start + self.columns()])
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    // Both axes are checked: a negative row paired with a large column can
    // still land on a valid flat offset.
    #[inline]
    fn offset(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            // In range on both axes, so the offset is below `len` and fits.
            Some(position.row as usize * self.columns() + position.column as usize)
        } else {
            None
        }
    }

    /// The cell at `position`, or `None` when it lies outside the grid.
    pub fn get(&self, position: Position) -> Option<&T> {
        self.offset(position).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.offset(position).map(move |idx| &mut self.cells[idx])
    }

    /// Overwrite one slot. Returns `false`, leaving the grid untouched, when
    /// `position` is out of bounds.
    pub fn set_in_place(&mut self, position: Position, value: T) -> bool {
        match self.get_mut(position) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Replace one slot with `f(current)`. Returns `false` when `position` is
    /// out of bounds; `f` is not called in that case.
    pub fn update_in_place<F>(&mut self, position: Position, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        match self.get_mut(position) {
            Some(slot) => {
                *slot = f(&*slot);
                true
            }
            None => false,
        }
    }

    /// The grid with `position` set to `value`; unchanged if out of bounds.
    pub fn set(mut self, position: Position, value: T) -> Self {
        self.set_in_place(position, value);
        self
    }

    /// The grid with `position` replaced by `f(current)`; unchanged if out of
    /// bounds.
    pub fn update<F>(mut self, position: Position, f: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        self.update_in_place(position, f);
        self
    }

    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            dimensions: self.dimensions,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Like [`Grid::map`], with `f` also receiving the cell's row and column.
    /// Cells are visited in row-major order.
    pub fn indexed_map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(usize, usize, &T) -> U,
    {
        let columns = self.columns();
        Grid {
            dimensions: self.dimensions,
            cells: self
                .cells
                .iter()
                .enumerate()
                .map(|(idx, value)| f(idx / columns, idx % columns, value))
                .collect(),
        }
    }

    /// Fold over the cells from the first to the last.
    pub fn foldl<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.cells.iter().fold(init, f)
    }

    /// Fold over the cells from the last to the first.
    pub fn foldr<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        self.cells.iter().rev().fold(init, |acc, value| f(value, acc))
    }

    /// Compute every new cell from the whole current grid.
    ///
    /// `f(row, column, grid)` always sees `self` as it was before the pass
    /// started; no call observes a value produced by an earlier call. Cells
    /// are computed in row-major order.
    pub fn transform<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(usize, usize, &Grid<T>) -> U,
    {
        Grid::initialize(self.dimensions, |row, column| f(row, column, self))
    }

    /// Every valid position, row by row.
    pub fn matrix_indices(&self) -> MatrixIndices {
        MatrixIndices::new(self.columns(), self.len())
    }

    /// Visit every cell with its position, in row-major order.
    pub fn for_each_cell<F>(&self, mut visit: F)
    where
        F: FnMut(Position, &T),
    {
        for (position, value) in self.matrix_indices().zip(self.cells.iter()) {
            visit(position, value);
        }
    }
}

impl<T> Grid<T>
where
    T: Clone,
{
    /// Every cell holds its own clone of `value`.
    ///
    /// # Panics
    ///
    /// Panics when `rows * columns` overflows `usize`.
    pub fn repeat(dimensions: Dimensions, value: T) -> Self {
        Self {
            dimensions,
            cells: vec![value; dimensions.len()],
        }
    }
}

impl<T> Grid<T>
where
    T: Clone + Zero,
{
    pub fn zeros(dimensions: Dimensions) -> Self {
        Grid::repeat(dimensions, T::zero())
    }
}

impl<T> Grid<T>
where
    T: Clone + One,
{
    pub fn ones(dimensions: Dimensions) -> Self {
        Grid::repeat(dimensions, T::one())
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Grid::empty()
    }
}

impl<T> From<Grid<T>> for Vec<T> {
    fn from(value: Grid<T>) -> Self {
        value.cells
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Unchecked-style access for callers that already know `(row, column)` is
/// in range.
///
/// # Panics
///
/// Panics when either coordinate is out of range. Use [`Grid::get`] for the
/// lenient lookup.
impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows() && column < self.columns(),
            "grid index ({}, {}) out of bounds for {} grid",
            row,
            column,
            self.dimensions
        );
        &self.cells[column + self.columns() * row]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            let cells = self.row(row).unwrap_or_default();
            for (idx, value) in cells.iter().enumerate() {
                if idx > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
