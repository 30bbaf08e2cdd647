//! Square facelet grids and whole-grid rotation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Error returned when a grid's dimensions do not match what a cube expects.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("expected a {expected}x{expected} grid; got {rows}x{cols}")]
pub struct ShapeError {
    /// Side length the cube requires.
    pub expected: usize,
    /// Row count actually supplied.
    pub rows: usize,
    /// Column count actually supplied.
    pub cols: usize,
}

/// Buffer holding one extracted layer slice.
///
/// A slice has one element per grid row or column, so for ordinary cube
/// sizes it lives on the stack.
pub type Slice<T> = SmallVec<[T; 8]>;

/// Square matrix of cells, stored row-major.
///
/// The side length is a runtime value; nothing here assumes 3x3. Every cell
/// is always populated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Returns a grid with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f(row, col)` for every cell.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(row, col));
            }
        }
        Self { size, cells }
    }

    /// Builds a grid from a list of rows, checking that the result is square.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let size = rows.len();
        for row in &rows {
            if row.len() != size {
                return Err(ShapeError {
                    expected: size,
                    rows: size,
                    cols: row.len(),
                });
            }
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Returns the cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        (row < self.size && col < self.size).then(|| &self.cells[row * self.size + col])
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }
}

impl<T: Copy> Grid<T> {
    /// Copies out row `row` (0-based).
    pub fn row(&self, row: usize) -> Slice<T> {
        self.cells[row * self.size..(row + 1) * self.size]
            .iter()
            .copied()
            .collect()
    }

    /// Copies out column `col` (0-based).
    pub fn col(&self, col: usize) -> Slice<T> {
        (0..self.size).map(|row| self.cells[self.idx(row, col)]).collect()
    }

    /// Overwrites row `row` with `values`, which must have `size` elements.
    pub fn set_row(&mut self, row: usize, values: &[T]) {
        debug_assert_eq!(values.len(), self.size);
        let start = row * self.size;
        self.cells[start..start + self.size].copy_from_slice(values);
    }

    /// Overwrites column `col` with `values`, which must have `size` elements.
    pub fn set_col(&mut self, col: usize, values: &[T]) {
        debug_assert_eq!(values.len(), self.size);
        for (row, &value) in values.iter().enumerate() {
            let i = self.idx(row, col);
            self.cells[i] = value;
        }
    }

    /// Returns this grid rotated by `quarter_turns` quarter turns,
    /// counterclockwise-positive. Any integer is accepted; only its value
    /// mod 4 matters, and `g.rotated(k).rotated(-k) == g` for all `k`.
    #[must_use]
    pub fn rotated(&self, quarter_turns: i32) -> Self {
        let n = self.size;
        match quarter_turns.rem_euclid(4) {
            1 => Self::from_fn(n, |row, col| self.cells[self.idx(col, n - 1 - row)]),
            2 => Self::from_fn(n, |row, col| self.cells[self.idx(n - 1 - row, n - 1 - col)]),
            3 => Self::from_fn(n, |row, col| self.cells[self.idx(n - 1 - col, row)]),
            _ => self.clone(),
        }
    }
}
