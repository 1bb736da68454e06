#![deny(unsafe_code)]
//! Core types for hovergrid, a square grid of cells painted by pointer hover.
//!
//! Provides the `Rgb` color type and hex conversion, the `ColorModel` that
//! turns a `ColorSetting` into a color, the `GridState` hover state machine,
//! `GridConfig`, the pluggable `RandomSource` with its `Xorshift64`
//! implementation, and replayable `Sketch` recordings.

pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod model;
pub mod prng;
pub mod setting;
pub mod sketch;

pub use color::{blend_to_black, random_channel, ChannelRange, Rgb};
pub use config::GridConfig;
pub use error::GridError;
pub use grid::{parse_size, Cell, GridState, TransitionLevel};
pub use model::ColorModel;
pub use prng::{RandomSource, Xorshift64};
pub use setting::{ColorMode, ColorSetting};
pub use sketch::{Sketch, Stroke};
