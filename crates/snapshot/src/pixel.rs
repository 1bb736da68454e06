//! Pure-computation RGBA8 rasterisation of a [`GridState`].
//!
//! Always available (no feature gate) so the PNG path and any canvas-based
//! front end share the same pixels.

use hovergrid_core::{GridError, GridState, Rgb};

/// Board edge in pixels the classic page lays the grid out in.
pub const BOARD_PX: usize = 600;

/// Largest image edge the rasteriser will produce (a 1 GiB RGBA buffer).
pub const MAX_EDGE_PX: usize = 16_384;

/// How each cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raster {
    /// Edge length of one cell in pixels. Zero is treated as one.
    pub cell_px: usize,
    /// Draw a 1-pixel [`Rgb::BORDER`] frame inside each cell. Skipped for
    /// cells smaller than 3 pixels, where it would cover the whole cell.
    pub border: bool,
}

impl Default for Raster {
    fn default() -> Self {
        Self {
            cell_px: 16,
            border: true,
        }
    }
}

impl Raster {
    /// Picks the largest cell size that fits `size` cells into `board_px`.
    pub fn fitted(size: usize, board_px: usize) -> Self {
        Self {
            cell_px: (board_px / size.max(1)).max(1),
            border: true,
        }
    }

    fn cell_px(&self) -> usize {
        self.cell_px.max(1)
    }

    /// Image edge length in pixels for a grid of `size` cells.
    ///
    /// Returns `GridError::InvalidConfig` if the edge overflows or exceeds
    /// [`MAX_EDGE_PX`].
    pub fn edge_px(&self, size: usize) -> Result<usize, GridError> {
        size.checked_mul(self.cell_px())
            .filter(|&edge| edge <= MAX_EDGE_PX)
            .ok_or_else(|| {
                GridError::InvalidConfig(format!(
                    "{size} cells of {}px exceed the {MAX_EDGE_PX}px image limit",
                    self.cell_px
                ))
            })
    }
}

/// Renders every cell's display color as a block of pixels, row-major RGBA8.
///
/// The buffer is `edge * edge * 4` bytes where `edge = size * cell_px`.
/// Fails before allocating if the edge is out of range (see [`Raster::edge_px`]).
pub fn grid_to_rgba(grid: &GridState, raster: &Raster) -> Result<Vec<u8>, GridError> {
    let cell_px = raster.cell_px();
    let edge = raster.edge_px(grid.size())?;
    let framed = raster.border && cell_px >= 3;
    let colors = grid.display_colors();

    let mut buf = Vec::with_capacity(edge * edge * 4);
    for y in 0..edge {
        let (row, inner_y) = (y / cell_px, y % cell_px);
        for x in 0..edge {
            let (col, inner_x) = (x / cell_px, x % cell_px);
            let on_frame = framed
                && (inner_x == 0 || inner_y == 0 || inner_x == cell_px - 1 || inner_y == cell_px - 1);
            let color = if on_frame {
                Rgb::BORDER
            } else {
                colors[row * grid.size() + col]
            };
            buf.extend_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }
    Ok(buf)
}
