#![deny(unsafe_code)]
//! Turns a hovergrid board into pixels.
//!
//! [`pixel`] rasterises a `GridState` into an RGBA8 buffer; [`snapshot`]
//! (feature `png`) writes that buffer to disk. Both the CLI and any canvas
//! front end share the same rasteriser.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{grid_to_rgba, Raster, BOARD_PX, MAX_EDGE_PX};

#[cfg(feature = "png")]
pub use snapshot::write_png;
