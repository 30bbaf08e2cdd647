//! Static turn topology: belts, caps, and alignment corrections.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::Face;

/// One of the two turn axes of the cube.
///
/// Turning about an axis cyclically shifts layer slices through that axis's
/// belt of four side faces and, for outer layers, spins one cap face in
/// place.
#[derive(Serialize, Deserialize, Display, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Axis {
    /// Shifts rows through Front, Right, Back, Left; caps are Top (near,
    /// layer 1) and Bottom (far, layer N).
    Yaw,
    /// Shifts columns through Front, Top, Back, Bottom; caps are Left
    /// (near, layer 1) and Right (far, layer N).
    Pitch,
}

impl Axis {
    /// The static topology for this axis.
    pub fn topology(self) -> &'static AxisTopology {
        match self {
            Axis::Yaw => &YAW,
            Axis::Pitch => &PITCH,
        }
    }
}

/// Whether an axis's layer index selects rows or columns of the belt faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SliceKind {
    /// Layer `i` is row `i` of each aligned belt face.
    Rows,
    /// Layer `i` is column `i` of each aligned belt face.
    Cols,
}

/// Static description of how one axis threads through the six faces.
///
/// Face grids are stored in the orientation they take in the unfolded net,
/// so the same layer index does not line up across a belt as stored. The
/// `alignment` entry for each belt face is the reversible whole-grid
/// rotation that brings it into a shared frame where the index does line
/// up; the turn engine applies it before slicing and undoes it afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AxisTopology {
    /// The four side faces, in cyclic shift order.
    pub belt: [Face; 4],
    /// Per belt face, the alignment correction in counterclockwise quarter
    /// turns.
    pub alignment: [i8; 4],
    /// Cap spun by turns of layer 1.
    pub near_cap: Face,
    /// Cap spun by turns of layer N.
    pub far_cap: Face,
    /// Index kind the layer number selects on the aligned belt faces.
    pub slices: SliceKind,
}

/// Belt, caps, and alignment for turns about the top-bottom poles.
pub const YAW: AxisTopology = AxisTopology {
    belt: [Face::Front, Face::Right, Face::Back, Face::Left],
    alignment: [0, -1, -2, 1],
    near_cap: Face::Top,
    far_cap: Face::Bottom,
    slices: SliceKind::Rows,
};

/// Belt, caps, and alignment for turns about the left-right poles.
pub const PITCH: AxisTopology = AxisTopology {
    belt: [Face::Front, Face::Top, Face::Back, Face::Bottom],
    alignment: [0, 0, 0, 2],
    near_cap: Face::Left,
    far_cap: Face::Right,
    slices: SliceKind::Cols,
};

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_belts_and_caps_partition_the_faces() {
        for axis in Axis::iter() {
            let topo = axis.topology();
            let mut faces: Vec<Face> = topo.belt.to_vec();
            faces.push(topo.near_cap);
            faces.push(topo.far_cap);
            faces.sort();
            faces.dedup();
            assert_eq!(faces.len(), Face::COUNT, "{axis:?}");
        }
    }

    #[test]
    fn test_caps_are_opposite_poles() {
        for axis in Axis::iter() {
            let topo = axis.topology();
            assert_eq!(topo.near_cap.opposite(), topo.far_cap);
        }
    }
}
