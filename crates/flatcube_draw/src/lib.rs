//! Unfolded-net rendering and color schemes for flatcube.
//!
//! Everything here consumes a [`flatcube_core::CubeState`] read-only: a
//! [`Net`] is a flattened snapshot, a [`Palette`] maps its cells to RGB,
//! and [`Net::to_image`] rasterizes it. The core crate never depends on
//! any of this.

#[macro_use]
extern crate lazy_static;

mod net;
mod palette;
mod rgb;

pub use net::{DEFAULT_CELL_PX, LayoutError, Net, NetCell, NetLayout};
pub use palette::{DEFAULT_PALETTE, Palette};
pub use rgb::Rgb;

/// Re-export of `image`, whose buffer types appear in rasterization output.
pub use image;
