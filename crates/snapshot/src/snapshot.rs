//! PNG export of a [`GridState`].
//!
//! Feature-gated behind `png` (default on) so a WASM build can use the
//! rasteriser in [`crate::pixel`] without pulling in the `image` crate.

use hovergrid_core::{GridError, GridState};
use std::path::Path;

use crate::pixel::{grid_to_rgba, Raster};

/// Writes the grid's display colors as a PNG image.
///
/// Returns `GridError::InvalidConfig` if the raster is too large (checked
/// before any pixels are produced), or `GridError::Io` if the write fails.
pub fn write_png(grid: &GridState, raster: &Raster, path: &Path) -> Result<(), GridError> {
    let edge = u32::try_from(raster.edge_px(grid.size())?)
        .map_err(|_| GridError::Io("image dimensions overflow u32".into()))?;
    let rgba = grid_to_rgba(grid, raster)?;
    let img = image::RgbaImage::from_raw(edge, edge, rgba)
        .ok_or_else(|| GridError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| GridError::Io(e.to_string()))?;
    log::debug!("wrote {edge}x{edge} snapshot to {}", path.display());
    Ok(())
}
