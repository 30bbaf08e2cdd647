//! Unfolded cross layouts.

use flatcube_core::{CubeState, Face, Sticker};
use image::RgbImage;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Palette, Rgb};

/// Pixels per facelet used by the demo driver when rasterizing.
pub const DEFAULT_CELL_PX: u32 = 50;

/// One cell of an unfolded net: a sticker, or the filler around the cross.
///
/// The filler is an explicit variant rather than a seventh "color" so it
/// can never be confused with (or stored as) a real sticker.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NetCell {
    /// Padding outside every face block.
    #[default]
    Empty,
    /// A facelet copied from a face grid.
    Sticker(Sticker),
}

/// Error returned for an unusable face-placement table.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Block rows of differing lengths.
    #[error("net layout rows must all have the same length")]
    Ragged,
    /// The same face placed in two blocks.
    #[error("face {0} appears more than once in the net layout")]
    DuplicateFace(Face),
    /// A face with no block at all.
    #[error("face {0} is missing from the net layout")]
    MissingFace(Face),
}

/// Face-placement table for an unfolded net: which face occupies each block
/// of a block-grid, with `None` blocks left empty.
///
/// Which face goes where is purely a display convention; any table that
/// places each face exactly once is valid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Vec<Vec<Option<Face>>>", into = "Vec<Vec<Option<Face>>>")]
pub struct NetLayout {
    blocks: Vec<Vec<Option<Face>>>,
}

impl Default for NetLayout {
    fn default() -> Self {
        Self::cross()
    }
}

impl TryFrom<Vec<Vec<Option<Face>>>> for NetLayout {
    type Error = LayoutError;

    fn try_from(blocks: Vec<Vec<Option<Face>>>) -> Result<Self, LayoutError> {
        Self::from_blocks(blocks)
    }
}
impl From<NetLayout> for Vec<Vec<Option<Face>>> {
    fn from(layout: NetLayout) -> Self {
        layout.blocks
    }
}

impl NetLayout {
    /// The classic cross: Back above, Front below, and the Left, Top,
    /// Right, Bottom band across the middle of a 3x4 block grid.
    pub fn cross() -> Self {
        use Face::*;
        Self {
            blocks: vec![
                vec![None, Some(Back), None, None],
                vec![Some(Left), Some(Top), Some(Right), Some(Bottom)],
                vec![None, Some(Front), None, None],
            ],
        }
    }

    /// Builds a layout from a block table, checking that it is rectangular
    /// and places every face exactly once.
    pub fn from_blocks(blocks: Vec<Vec<Option<Face>>>) -> Result<Self, LayoutError> {
        use flatcube_core::strum::IntoEnumIterator;

        if blocks.iter().any(|row| row.len() != blocks[0].len()) {
            return Err(LayoutError::Ragged);
        }
        let mut seen = [false; Face::COUNT];
        for &face in blocks.iter().flatten().flatten() {
            if std::mem::replace(&mut seen[face as usize], true) {
                return Err(LayoutError::DuplicateFace(face));
            }
        }
        if let Some(face) = Face::iter().find(|&face| !seen[face as usize]) {
            return Err(LayoutError::MissingFace(face));
        }
        Ok(Self { blocks })
    }

    /// Number of block rows.
    pub fn block_rows(&self) -> usize {
        self.blocks.len()
    }

    /// Number of block columns.
    pub fn block_cols(&self) -> usize {
        self.blocks.first().map_or(0, Vec::len)
    }

    /// The face placed at one block position, if any.
    pub fn face_at(&self, block_row: usize, block_col: usize) -> Option<Face> {
        *self.blocks.get(block_row)?.get(block_col)?
    }
}

/// An unfolded cube: every face block pasted into one rectangular grid of
/// [`NetCell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Net {
    rows: usize,
    cols: usize,
    cells: Vec<NetCell>,
}

impl Net {
    /// Unfolds a snapshot of `cube` according to `layout`.
    ///
    /// For an N-cube the result is `(block_rows * N)` rows by
    /// `(block_cols * N)` columns; exactly `6 * N^2` cells are stickers and
    /// the rest are [`NetCell::Empty`].
    pub fn unfold(cube: &CubeState, layout: &NetLayout) -> Net {
        let n = cube.size();
        let rows = layout.block_rows() * n;
        let cols = layout.block_cols() * n;
        let mut cells = vec![NetCell::Empty; rows * cols];
        for (block_row, block_col) in iproduct!(0..layout.block_rows(), 0..layout.block_cols()) {
            let Some(face) = layout.face_at(block_row, block_col) else {
                continue;
            };
            let grid = cube.face(face);
            for (row, col) in iproduct!(0..n, 0..n) {
                if let Some(&sticker) = grid.get(row, col) {
                    cells[(block_row * n + row) * cols + block_col * n + col] =
                        NetCell::Sticker(sticker);
                }
            }
        }
        Net { rows, cols, cells }
    }

    /// Number of cell rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cell columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<NetCell> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = NetCell> + '_ {
        self.cells.iter().copied()
    }

    /// Rasterizes the net with `cell_px` pixels per facelet.
    pub fn to_image(&self, palette: &Palette, cell_px: u32) -> RgbImage {
        let cell_px = cell_px.max(1);
        RgbImage::from_fn(
            self.cols as u32 * cell_px,
            self.rows as u32 * cell_px,
            |x, y| {
                let cell = self
                    .get((y / cell_px) as usize, (x / cell_px) as usize)
                    .unwrap_or_default();
                let Rgb { rgb } = palette.color(cell);
                image::Rgb(rgb)
            },
        )
    }
}
