//! Error types for the hovergrid core.

use thiserror::Error;

/// Errors produced by grid and color operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A resize was requested outside `1..=max`, or the size text was not an integer.
    #[error("invalid grid size '{requested}': expected an integer between 1 and {max}")]
    InvalidSize { requested: String, max: usize },

    /// A color string was not of the form `#rrggbb`.
    #[error("invalid color format: {0}")]
    InvalidFormat(String),

    /// A `(row, col)` coordinate was outside the grid.
    #[error("cell ({row}, {col}) out of bounds for grid of size {size}")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// A color mode name was not one of the known modes.
    #[error("unknown color mode: {0}")]
    UnknownMode(String),

    /// A grid configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An I/O operation (snapshot write, file read) failed.
    #[error("I/O error: {0}")]
    Io(String),
}
