//! The square grid of hoverable cells and the hover state machine.
//!
//! Cells live in a row-major `Vec` addressed by `(row, col)`. Each cell keeps
//! the color it was painted with and an integer transition level (0 to 100 in
//! steps of 10) saying how far it has decayed toward black.

use serde::{Deserialize, Serialize};

use crate::color::{blend_to_black, Rgb};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::model::ColorModel;
use crate::prng::RandomSource;
use crate::setting::ColorSetting;

/// Percent blended toward black. Always a multiple of 10 in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TransitionLevel(u8);

impl TransitionLevel {
    pub const ZERO: TransitionLevel = TransitionLevel(0);
    pub const FULL: TransitionLevel = TransitionLevel(100);
    pub const STEP: u8 = 10;

    /// The next level up, saturating at [`TransitionLevel::FULL`].
    pub fn step(self) -> Self {
        TransitionLevel((self.0 + Self::STEP).min(Self::FULL.0))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// The level as a blend fraction in `[0, 1]`.
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn is_full(self) -> bool {
        self == Self::FULL
    }
}

impl TryFrom<u8> for TransitionLevel {
    type Error = String;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        if percent <= Self::FULL.0 && percent % Self::STEP == 0 {
            Ok(TransitionLevel(percent))
        } else {
            Err(format!("transition level {percent} is not a multiple of 10 in 0..=100"))
        }
    }
}

impl From<TransitionLevel> for u8 {
    fn from(level: TransitionLevel) -> u8 {
        level.0
    }
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub base: Rgb,
    pub level: TransitionLevel,
}

impl Cell {
    pub fn new(base: Rgb) -> Self {
        Self {
            base,
            level: TransitionLevel::ZERO,
        }
    }

    /// The color to show: the base color darkened by the transition level.
    pub fn display_color(&self) -> Rgb {
        if self.level == TransitionLevel::ZERO {
            self.base
        } else {
            blend_to_black(self.base, self.level.fraction())
        }
    }
}

/// Authoritative per-cell color state for a `size x size` grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    config: GridConfig,
    model: ColorModel,
    size: usize,
    cells: Vec<Cell>,
}

impl GridState {
    /// Creates a grid at `config.default_size`.
    ///
    /// Returns `GridError::InvalidConfig` if the config does not validate.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let size = config.default_size;
        log::debug!("creating {size}x{size} grid");
        Ok(Self {
            config,
            model: config.color_model(),
            size,
            cells: vec![Cell::new(config.unset_color); size * size],
        })
    }

    /// Creates a grid of `size` using the default config.
    pub fn with_size(size: usize) -> Result<Self, GridError> {
        let mut grid = Self::new(GridConfig::default())?;
        grid.resize(size)?;
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn model(&self) -> &ColorModel {
        &self.model
    }

    /// Rebuilds the grid at `n x n` with every cell unset.
    ///
    /// Returns `GridError::InvalidSize` if `n` is outside `1..=max_size`, in
    /// which case the current cells are left as they were.
    pub fn resize(&mut self, n: usize) -> Result<(), GridError> {
        if !(1..=self.config.max_size).contains(&n) {
            log::warn!("rejected resize to {n} (max {})", self.config.max_size);
            return Err(GridError::InvalidSize {
                requested: n.to_string(),
                max: self.config.max_size,
            });
        }
        log::debug!("resizing grid {0}x{0} -> {n}x{n}", self.size);
        self.size = n;
        self.cells = vec![Cell::new(self.config.unset_color); n * n];
        Ok(())
    }

    /// Parses the size text box and resizes. See [`parse_size`].
    pub fn resize_from_str(&mut self, input: &str) -> Result<(), GridError> {
        let n = parse_size(input, self.config.max_size)?;
        self.resize(n)
    }

    /// Clears every cell back to unset without changing the size.
    pub fn reset(&mut self) {
        log::debug!("resetting {0}x{0} grid", self.size);
        self.cells.fill(Cell::new(self.config.unset_color));
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).ok().map(|i| &self.cells[i])
    }

    pub fn display_color(&self, row: usize, col: usize) -> Option<Rgb> {
        self.cell(row, col).map(Cell::display_color)
    }

    /// Applies one hover to `(row, col)` and returns the color to display.
    ///
    /// - eraser mode, or a cell still at the unset color: repaint with the
    ///   resolved color and drop back to level 0.
    /// - a cell at level 100: nothing changes.
    /// - otherwise: darken one step, keeping the base color.
    ///
    /// Returns `GridError::OutOfBounds` for coordinates outside the grid.
    pub fn apply_hover(
        &mut self,
        row: usize,
        col: usize,
        setting: &ColorSetting,
        rng: &mut impl RandomSource,
    ) -> Result<Rgb, GridError> {
        let idx = self.index(row, col)?;
        let unset = self.config.unset_color;
        let cell = &mut self.cells[idx];
        if setting.is_eraser() || cell.base == unset {
            *cell = Cell::new(self.model.resolve(setting, rng));
        } else if !cell.level.is_full() {
            cell.level = cell.level.step();
        }
        log::trace!(
            "hover ({row}, {col}) {}: base {} level {}",
            setting.mode,
            cell.base,
            cell.level.percent()
        );
        Ok(cell.display_color())
    }

    /// Iterates over all cells as `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i / self.size, i % self.size, cell))
    }

    /// Display colors of every cell, row-major.
    pub fn display_colors(&self) -> Vec<Rgb> {
        self.cells.iter().map(Cell::display_color).collect()
    }

    /// True when every cell is unset at level 0.
    pub fn is_blank(&self) -> bool {
        let blank = Cell::new(self.config.unset_color);
        self.cells.iter().all(|c| *c == blank)
    }
}

/// Parses a grid size typed by the user.
///
/// Surrounding whitespace is ignored. Anything that is not a plain decimal
/// integer in `1..=max` is `GridError::InvalidSize`.
pub fn parse_size(input: &str, max: usize) -> Result<usize, GridError> {
    let trimmed = input.trim();
    let invalid = || GridError::InvalidSize {
        requested: trimmed.to_string(),
        max,
    };
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(invalid()),
    }
}
