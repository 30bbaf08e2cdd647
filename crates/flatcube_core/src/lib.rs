//! Facelet cube model and layer-turn engine.
//!
//! A cube is six independent square grids of colored facelets, one per
//! [`Face`]. [`rotate_layer`] turns one layer (or every layer) about one of
//! the two [`Axis`] values, cyclically trading slices between the four belt
//! faces and spinning the touched cap faces in place. Rendering lives in
//! `flatcube_draw`; this crate does no I/O.

mod face;
mod grid;
mod state;
mod topology;
mod turn;

pub use face::{Face, FaceColors, PerFace, Sticker};
pub use grid::{Grid, ShapeError, Slice};
pub use state::{CubeState, DEFAULT_CUBE_SIZE};
pub use topology::{Axis, AxisTopology, PITCH, SliceKind, YAW};
pub use turn::{InvalidLayerError, Layers, TwistDirection, rotate_layer};

/// Re-export of `strum`, for iterating over [`Face`] and [`Sticker`].
pub use strum;
