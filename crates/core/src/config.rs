//! Grid configuration: size bounds, the unset cell color, and the rainbow range.
//!
//! [`GridConfig::from_json`] is lenient: a missing or wrongly typed key falls
//! back to its default, so a partial config object is always usable.
//! [`GridConfig::validate`] is where bad values are rejected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::{ChannelRange, Rgb};
use crate::error::GridError;
use crate::model::ColorModel;

pub const DEFAULT_SIZE: usize = 16;
pub const MAX_SIZE: usize = 100;

/// Static configuration shared by every grid built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Size used at start-up.
    pub default_size: usize,
    /// Largest accepted size (inclusive).
    pub max_size: usize,
    /// Color of a cell nobody has hovered yet.
    pub unset_color: Rgb,
    /// Channel range for rainbow mode.
    pub rainbow: ChannelRange,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            max_size: MAX_SIZE,
            unset_color: Rgb::WHITE,
            rainbow: ChannelRange::default(),
        }
    }
}

impl GridConfig {
    /// Builds a config from a JSON object, defaulting anything missing.
    ///
    /// Recognised keys: `default_size`, `max_size`, `unset_color` (`"#rrggbb"`),
    /// `rainbow_min`, `rainbow_max`. The result is not validated.
    pub fn from_json(params: &Value) -> Self {
        let defaults = Self::default();
        Self {
            default_size: param_usize(params, "default_size", defaults.default_size),
            max_size: param_usize(params, "max_size", defaults.max_size),
            unset_color: param_rgb(params, "unset_color", defaults.unset_color),
            rainbow: ChannelRange::new(
                param_u8(params, "rainbow_min", defaults.rainbow.min),
                param_u8(params, "rainbow_max", defaults.rainbow.max),
            ),
        }
    }

    /// Checks `1 <= max_size <= MAX_SIZE`, `1 <= default_size <= max_size`,
    /// and `rainbow.min <= rainbow.max`.
    pub fn validate(&self) -> Result<(), GridError> {
        if !(1..=MAX_SIZE).contains(&self.max_size) {
            return Err(GridError::InvalidConfig(format!(
                "max_size {} outside 1..={MAX_SIZE}",
                self.max_size
            )));
        }
        if !(1..=self.max_size).contains(&self.default_size) {
            return Err(GridError::InvalidConfig(format!(
                "default_size {} outside 1..={}",
                self.default_size, self.max_size
            )));
        }
        if self.rainbow.min > self.rainbow.max {
            return Err(GridError::InvalidConfig(format!(
                "rainbow range is reversed: {:#04x} > {:#04x}",
                self.rainbow.min, self.rainbow.max
            )));
        }
        Ok(())
    }

    /// The color model this config implies.
    pub fn color_model(&self) -> ColorModel {
        ColorModel::new(self.rainbow, self.unset_color)
    }
}

fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

fn param_u8(params: &Value, name: &str, default: u8) -> u8 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u8::try_from(v).ok())
        .unwrap_or(default)
}

fn param_rgb(params: &Value, name: &str, default: Rgb) -> Rgb {
    params
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| Rgb::from_hex(s).ok())
        .unwrap_or(default)
}
