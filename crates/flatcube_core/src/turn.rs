//! The layer-turn engine.
//!
//! A turn is a pure permutation of sticker positions: the four belt faces
//! trade layer slices and at most two cap faces spin in place. Nothing is
//! ever recolored, so the global multiset of sticker colors is invariant.

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use crate::topology::SliceKind;
use crate::{Axis, CubeState, Face, Grid, Slice, Sticker};

/// Error returned for a layer index outside `1..=N`.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("layer index {index} is outside 1..={layer_count}")]
pub struct InvalidLayerError {
    /// The rejected 1-based index.
    pub index: usize,
    /// Number of layers on the cube the turn was applied to.
    pub layer_count: usize,
}

/// Which layers a turn applies to.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Layers {
    /// Every layer: the whole cube turns, spinning both caps.
    #[default]
    All,
    /// A single 1-based layer; layer 1 borders the near cap.
    One(usize),
}

impl fmt::Display for Layers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layers::All => write!(f, "all"),
            Layers::One(index) => write!(f, "{index}"),
        }
    }
}

impl From<usize> for Layers {
    fn from(index: usize) -> Self {
        Layers::One(index)
    }
}

/// Direction of a layer turn: clockwise or counterclockwise as seen from
/// the axis's far pole, looking toward the near pole.
#[derive(Serialize, Deserialize, Display, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TwistDirection {
    /// Clockwise; shifts belt contents one face forward in belt order.
    Cw,
    /// Counterclockwise; the inverse of [`TwistDirection::Cw`].
    Ccw,
}

impl TwistDirection {
    /// Returns the direction that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            TwistDirection::Cw => TwistDirection::Ccw,
            TwistDirection::Ccw => TwistDirection::Cw,
        }
    }

    /// Signed shift distance along the belt: `+1` or `-1`.
    pub fn sign(self) -> i32 {
        match self {
            TwistDirection::Cw => 1,
            TwistDirection::Ccw => -1,
        }
    }
}

/// Turns the selected layer(s) of `cube` about `axis`.
///
/// The belt faces are first brought into a shared frame by their alignment
/// corrections, the slice ring at each selected index is shifted
/// `direction` positions along the belt, and the corrections are undone.
/// Layer 1 also spins the near cap by `direction` x 90°; layer N spins the
/// far cap by the opposite amount; interior layers spin no cap;
/// [`Layers::All`] spins both caps exactly once.
///
/// Validation happens before any mutation: on error the cube is untouched,
/// and a successful call never exposes a partially shifted state.
pub fn rotate_layer(
    cube: &mut CubeState,
    axis: Axis,
    layers: Layers,
    direction: TwistDirection,
) -> Result<(), InvalidLayerError> {
    let size = cube.size();
    if let Layers::One(index) = layers {
        if index < 1 || index > size {
            return Err(InvalidLayerError {
                index,
                layer_count: size,
            });
        }
    }
    trace!("turning {axis} {direction} (layers: {layers})");

    let topo = axis.topology();

    // Shift the slice ring(s) on aligned copies of the belt faces, then
    // write everything back, so the whole turn is one atomic swap.
    let mut belt: [Grid<Sticker>; 4] =
        std::array::from_fn(|i| cube.face(topo.belt[i]).rotated(i32::from(topo.alignment[i])));
    match layers {
        Layers::All => {
            for layer in 0..size {
                shift_ring(&mut belt, topo.slices, layer, direction.sign());
            }
        }
        Layers::One(index) => shift_ring(&mut belt, topo.slices, index - 1, direction.sign()),
    }
    for (i, grid) in belt.into_iter().enumerate() {
        *cube.face_mut(topo.belt[i]) = grid.rotated(-i32::from(topo.alignment[i]));
    }

    if matches!(layers, Layers::All | Layers::One(1)) {
        spin_cap(cube, topo.near_cap, direction.sign());
    }
    if layers == Layers::All || layers == Layers::One(size) {
        spin_cap(cube, topo.far_cap, -direction.sign());
    }
    Ok(())
}

/// Cyclically shifts one slice ring of the aligned belt faces by `shift`
/// positions along the belt.
fn shift_ring(belt: &mut [Grid<Sticker>; 4], slices: SliceKind, layer: usize, shift: i32) {
    let old: [Slice<Sticker>; 4] = std::array::from_fn(|i| match slices {
        SliceKind::Rows => belt[i].row(layer),
        SliceKind::Cols => belt[i].col(layer),
    });
    for (i, grid) in belt.iter_mut().enumerate() {
        let src = (i as i32 - shift).rem_euclid(4) as usize;
        match slices {
            SliceKind::Rows => grid.set_row(layer, &old[src]),
            SliceKind::Cols => grid.set_col(layer, &old[src]),
        }
    }
}

fn spin_cap(cube: &mut CubeState, cap: Face, quarter_turns: i32) {
    let spun = cube.face(cap).rotated(quarter_turns);
    *cube.face_mut(cap) = spun;
}

impl CubeState {
    /// Yaw turn carrying row contents toward the Right face
    /// (counterclockwise as seen from above).
    pub fn rotate_left(&mut self, layers: Layers) -> Result<(), InvalidLayerError> {
        rotate_layer(self, Axis::Yaw, layers, TwistDirection::Cw)
    }

    /// Yaw turn carrying row contents toward the Left face (clockwise as
    /// seen from above); undoes [`CubeState::rotate_left`].
    pub fn rotate_right(&mut self, layers: Layers) -> Result<(), InvalidLayerError> {
        rotate_layer(self, Axis::Yaw, layers, TwistDirection::Ccw)
    }

    /// Pitch turn carrying column contents toward the Top face.
    pub fn rotate_up(&mut self, layers: Layers) -> Result<(), InvalidLayerError> {
        rotate_layer(self, Axis::Pitch, layers, TwistDirection::Cw)
    }

    /// Pitch turn carrying column contents toward the Bottom face; undoes
    /// [`CubeState::rotate_up`].
    pub fn rotate_down(&mut self, layers: Layers) -> Result<(), InvalidLayerError> {
        rotate_layer(self, Axis::Pitch, layers, TwistDirection::Ccw)
    }
}
