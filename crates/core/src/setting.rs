//! Color settings: which mode the brush is in, plus the picker's custom color.
//!
//! A [`ColorSetting`] is an immutable snapshot. The UI owns the live values and
//! builds a fresh snapshot for every hover event.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::GridError;

/// The closed set of brush modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    Black,
    Grey,
    #[default]
    Rainbow,
    Custom,
    Eraser,
}

impl ColorMode {
    pub const ALL: [ColorMode; 5] = [
        ColorMode::Black,
        ColorMode::Grey,
        ColorMode::Rainbow,
        ColorMode::Custom,
        ColorMode::Eraser,
    ];

    /// Lowercase name used by buttons, the CLI, and JSON.
    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Black => "black",
            ColorMode::Grey => "grey",
            ColorMode::Rainbow => "rainbow",
            ColorMode::Custom => "custom",
            ColorMode::Eraser => "eraser",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| GridError::UnknownMode(s.to_string()))
    }
}

/// A mode together with the custom color the picker currently holds.
///
/// `custom` is carried in every mode but only read in [`ColorMode::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSetting {
    pub mode: ColorMode,
    #[serde(default = "default_custom")]
    pub custom: Rgb,
}

fn default_custom() -> Rgb {
    Rgb::GREEN
}

impl ColorSetting {
    /// A setting in `mode` with the default (green) custom color.
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            custom: default_custom(),
        }
    }

    /// A custom-mode setting painting `color`.
    pub fn custom(color: Rgb) -> Self {
        Self {
            mode: ColorMode::Custom,
            custom: color,
        }
    }

    pub fn with_custom(self, color: Rgb) -> Self {
        Self {
            custom: color,
            ..self
        }
    }

    pub fn is_eraser(&self) -> bool {
        self.mode == ColorMode::Eraser
    }
}

impl Default for ColorSetting {
    fn default() -> Self {
        Self::new(ColorMode::default())
    }
}

impl From<ColorMode> for ColorSetting {
    fn from(mode: ColorMode) -> Self {
        Self::new(mode)
    }
}
