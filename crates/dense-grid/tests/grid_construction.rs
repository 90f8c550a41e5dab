//! Integration tests for building grids and the index arithmetic behind them.

use std::cell::RefCell;

use dense_grid::{to_flat_index, to_position, Dimensions, Grid, GridError, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Index arithmetic
// ---------------------------------------------------------------------------

#[test]
fn inverse_law_holds_for_random_shapes() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let rows = rng.gen_range(1..40usize);
        let columns = rng.gen_range(1..40usize);
        let k = rng.gen_range(0..rows * columns) as isize;
        let position = to_position(columns, k);
        assert_eq!(to_flat_index(columns, position), Some(k));
        assert!((position.row as usize) < rows);
        assert!((position.column as usize) < columns);
    }
}

#[test]
#[should_panic(expected = "division by zero")]
fn to_position_with_zero_columns_panics() {
    let _ = to_position(0, 0);
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

#[test]
fn empty_grid_has_no_cells() {
    let grid: Grid<u8> = Grid::empty();
    assert_eq!(grid.dimensions(), Dimensions::new(0, 0));
    assert!(grid.is_empty());
    assert_eq!(grid.len(), 0);
    assert_eq!(grid.matrix_indices().count(), 0);
    assert_eq!(grid.get(Position::new(0, 0)), None);
}

#[test]
fn repeat_fills_every_slot_with_independent_copies() {
    let grid = Grid::repeat(Dimensions::new(2, 2), vec![1, 2]);
    assert_eq!(grid.len(), 4);

    let grid = grid.update(Position::new(0, 0), |cell| {
        let mut cell = cell.clone();
        cell.push(3);
        cell
    });
    assert_eq!(grid.get(Position::new(0, 0)), Some(&vec![1, 2, 3]));
    assert_eq!(grid.get(Position::new(0, 1)), Some(&vec![1, 2]));
    assert_eq!(grid.get(Position::new(1, 1)), Some(&vec![1, 2]));
}

#[test]
fn zeros_and_ones() {
    let zeros: Grid<f64> = Grid::zeros(Dimensions::new(2, 3));
    assert!(zeros.iter().all(|v| *v == 0.0));
    let ones: Grid<i32> = Grid::ones(Dimensions::new(3, 2));
    assert_eq!(ones.foldl(0, |acc, v| acc + v), 6);
}

#[test]
fn initialize_calls_generator_in_row_major_order() {
    let calls = RefCell::new(Vec::new());
    let grid = Grid::initialize(Dimensions::new(2, 3), |row, column| {
        calls.borrow_mut().push((row, column));
        row * 10 + column
    });
    assert_eq!(
        calls.into_inner(),
        vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
    );
    assert_eq!(grid.as_slice(), &[0, 1, 2, 10, 11, 12]);
}

#[test]
fn from_list_accepts_exact_length() {
    let grid = Grid::from_list(Dimensions::new(2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.columns(), 3);
    assert_eq!(grid.row(1), Some(&[4, 5, 6][..]));
    assert_eq!(grid.row(2), None);
}

#[test]
fn from_list_rejects_wrong_length() {
    let short = Grid::from_list(Dimensions::new(2, 3), vec![1, 2, 3]);
    assert_eq!(
        short,
        Err(GridError::DimensionMismatch {
            rows: 2,
            columns: 3,
            len: 3
        })
    );

    let long = Grid::from_list(Dimensions::new(1, 1), vec![1, 2]);
    assert!(long.is_err());

    let err = Grid::<u8>::from_list(Dimensions::new(2, 2), vec![]).unwrap_err();
    assert!(err.to_string().contains("expected 4"));
}

#[test]
fn from_list_rejects_overflowing_dimensions() {
    let result = Grid::<u8>::from_list(Dimensions::new(usize::MAX, 2), vec![]);
    let err = result.unwrap_err();
    assert_eq!(
        err,
        GridError::DimensionMismatch {
            rows: usize::MAX,
            columns: 2,
            len: 0
        }
    );
    assert!(err.to_string().contains("overflows usize"));

    let half = usize::MAX / 2 + 1;
    assert!(Grid::from_list(Dimensions::new(half, 2), vec![0u8]).is_err());
}

#[test]
fn dimensions_checked_len() {
    assert_eq!(Dimensions::new(3, 4).checked_len(), Some(12));
    assert_eq!(Dimensions::new(usize::MAX, 2).checked_len(), None);
    assert!(Dimensions::new(usize::MAX, 0).is_empty());
    assert_eq!(Dimensions::new(usize::MAX, 0).len(), 0);
}

#[test]
#[should_panic(expected = "overflow usize")]
fn repeat_with_overflowing_dimensions_panics() {
    let _ = Grid::repeat(Dimensions::new(usize::MAX, 2), 0u8);
}

#[test]
fn from_list_matches_get_for_random_grids() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let rows = rng.gen_range(0..12usize);
        let columns = rng.gen_range(0..12usize);
        let values: Vec<u32> = (0..rows * columns).map(|_| rng.gen()).collect();
        let grid = Grid::from_list(Dimensions::new(rows, columns), values.clone()).unwrap();
        for i in 0..rows {
            for j in 0..columns {
                let position = Position::new(i as isize, j as isize);
                assert_eq!(grid.get(position), Some(&values[j + columns * i]));
            }
        }
    }
}

#[test]
fn initialize_and_from_list_agree() {
    let built = Grid::initialize(Dimensions::new(2, 3), |i, j| i + j);
    let listed = Grid::from_list(Dimensions::new(2, 3), vec![0, 1, 2, 1, 2, 3]).unwrap();
    assert_eq!(built, listed);
}

#[test]
fn flat_list_round_trip() {
    let grid = Grid::initialize(Dimensions::new(3, 2), |i, j| (i, j));
    let rebuilt = Grid::from_list(grid.dimensions(), grid.to_list()).unwrap();
    assert_eq!(rebuilt, grid);
    let flat: Vec<(usize, usize)> = grid.into();
    assert_eq!(flat.len(), 6);
    assert_eq!(flat[3], (1, 1));
}

#[test]
fn display_prints_one_row_per_line() {
    let grid = Grid::from_list(Dimensions::new(2, 2), vec![1, 2, 3, 4]).unwrap();
    assert_eq!(grid.to_string(), "1 2\n3 4");
}
