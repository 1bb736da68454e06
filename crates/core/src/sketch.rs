//! Reproducible recordings of a drawing session.
//!
//! A [`Sketch`] captures the grid size, the PRNG seed used for rainbow mode,
//! the config, and every hover in order. Replaying the same sketch always
//! produces the same grid.

use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::error::GridError;
use crate::grid::GridState;
use crate::prng::Xorshift64;
use crate::setting::ColorSetting;

/// A single recorded hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    pub row: usize,
    pub col: usize,
    pub setting: ColorSetting,
}

/// A recorded drawing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    pub size: usize,
    pub seed: u64,
    #[serde(default)]
    pub config: GridConfig,
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

impl Sketch {
    /// An empty sketch with the default config.
    pub fn new(size: usize, seed: u64) -> Self {
        Self {
            size,
            seed,
            config: GridConfig::default(),
            strokes: Vec::new(),
        }
    }

    /// Appends a hover at `(row, col)`.
    pub fn push(&mut self, row: usize, col: usize, setting: ColorSetting) {
        self.strokes.push(Stroke { row, col, setting });
    }

    /// Builds a fresh grid and applies every stroke in order.
    ///
    /// Fails on an invalid config, a size outside the configured bounds, or a
    /// stroke outside the grid.
    pub fn replay(&self) -> Result<GridState, GridError> {
        let mut grid = GridState::new(self.config)?;
        grid.resize(self.size)?;
        let mut rng = Xorshift64::new(self.seed);
        log::debug!(
            "replaying {} strokes on {1}x{1} grid (seed {2})",
            self.strokes.len(),
            self.size,
            self.seed
        );
        for stroke in &self.strokes {
            grid.apply_hover(stroke.row, stroke.col, &stroke.setting, &mut rng)?;
        }
        Ok(grid)
    }
}
