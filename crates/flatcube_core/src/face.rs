//! Face and sticker identities, and per-face storage.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Color identity of a single facelet.
///
/// There are exactly six of these. The renderer's "empty" sentinel is a
/// separate type in the drawing crate; it can never be stored on a cube.
#[derive(
    Serialize, Deserialize, Display, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum Sticker {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
}

impl Sticker {
    /// Number of distinct sticker colors.
    pub const COUNT: usize = 6;
}

/// Identity of one of the six cube faces.
///
/// Face identities are fixed for the lifetime of a cube; a turn changes the
/// contents of face grids, never which faces exist.
#[derive(
    Serialize, Deserialize, Display, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum Face {
    Front,
    Back,
    Top,
    Bottom,
    Left,
    Right,
}

impl Face {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;

    /// Returns the face on the opposite side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }
}

/// Dense container holding one value per [`Face`].
///
/// Values are stored in face declaration order.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PerFace<T>(pub [T; Face::COUNT]);

impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        &self.0[face as usize]
    }
}
impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        &mut self.0[face as usize]
    }
}
impl<T> PerFace<T> {
    /// Builds a value for each face.
    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        Self([
            f(Face::Front),
            f(Face::Back),
            f(Face::Top),
            f(Face::Bottom),
            f(Face::Left),
            f(Face::Right),
        ])
    }
}

/// Face-to-color assignment used when constructing a solved cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct FaceColors(pub PerFace<Sticker>);

impl Default for FaceColors {
    fn default() -> Self {
        let mut colors = PerFace([Sticker::White; Face::COUNT]);
        colors[Face::Front] = Sticker::Yellow;
        colors[Face::Back] = Sticker::White;
        colors[Face::Top] = Sticker::Red;
        colors[Face::Bottom] = Sticker::Orange;
        colors[Face::Left] = Sticker::Green;
        colors[Face::Right] = Sticker::Blue;
        Self(colors)
    }
}
