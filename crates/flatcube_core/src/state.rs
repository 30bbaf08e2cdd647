//! Cube state: one sticker grid per face.

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::{Face, FaceColors, Grid, PerFace, ShapeError, Sticker};

/// Default side length for a cube.
pub const DEFAULT_CUBE_SIZE: usize = 3;

/// The full sticker arrangement of a cube: exactly one square grid per face.
///
/// A cube is created solved and then mutated in place by layer turns. Faces
/// are never added, removed, or swapped for another identity; only their
/// contents change. Turn logic lives in [`crate::rotate_layer`] and takes
/// the state as an explicit argument, so independent cubes can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    size: usize,
    faces: PerFace<Grid<Sticker>>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new(DEFAULT_CUBE_SIZE)
    }
}

impl CubeState {
    /// Returns a solved cube with the default color assignment.
    pub fn new(size: usize) -> Self {
        Self::with_colors(size, FaceColors::default())
    }

    /// Returns a solved cube, each face solid in its assigned color.
    pub fn with_colors(size: usize, colors: FaceColors) -> Self {
        Self {
            size,
            faces: PerFace::from_fn(|face| Grid::filled(size, colors.0[face])),
        }
    }

    /// Side length of each face.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read access to one face's grid.
    pub fn face(&self, face: Face) -> &Grid<Sticker> {
        &self.faces[face]
    }

    /// Write access to one face's grid.
    pub fn face_mut(&mut self, face: Face) -> &mut Grid<Sticker> {
        &mut self.faces[face]
    }

    /// Installs a new grid for `face`.
    ///
    /// The only validation is the shape check; any sticker arrangement is
    /// accepted. Whether the arrangement is reachable by turns is not this
    /// crate's concern.
    pub fn replace_face(&mut self, face: Face, grid: Grid<Sticker>) -> Result<(), ShapeError> {
        if grid.size() != self.size {
            return Err(ShapeError {
                expected: self.size,
                rows: grid.size(),
                cols: grid.size(),
            });
        }
        self.faces[face] = grid;
        Ok(())
    }

    /// Returns whether every face is solid in a single color.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| self.face(face).cells().all_equal())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_solved_construction() {
        let cube = CubeState::new(3);
        assert!(cube.is_solved());
        let colors = FaceColors::default();
        for face in Face::iter() {
            let grid = cube.face(face);
            assert_eq!(grid.size(), 3);
            assert!(grid.cells().all(|&s| s == colors.0[face]));
        }
    }

    #[test]
    fn test_each_color_used_once() {
        let colors = FaceColors::default();
        let mut seen: Vec<Sticker> = Face::iter().map(|face| colors.0[face]).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), Sticker::COUNT);
    }

    #[test]
    fn test_replace_face_checks_shape() {
        let mut cube = CubeState::new(3);
        let err = cube
            .replace_face(Face::Front, Grid::filled(4, Sticker::Red))
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError {
                expected: 3,
                rows: 4,
                cols: 4,
            }
        );
        assert!(cube.is_solved());

        cube.replace_face(Face::Front, Grid::filled(3, Sticker::Red))
            .unwrap();
        assert_eq!(cube.face(Face::Front), &Grid::filled(3, Sticker::Red));
    }
}
