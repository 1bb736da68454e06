//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: grid error (bad size, stroke out of bounds, bad config)
//! - 11: I/O error (reading a sketch, writing a snapshot)
//! - 12: input error (bad hex color, bad fraction, unknown mode)
//! - 13: serialization error

use hovergrid_core::GridError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A grid-level error (bad size, stroke out of bounds, bad config).
    Grid(GridError),
    /// An I/O error (reading a sketch or config, writing a snapshot).
    Io(String),
    /// Bad user input (hex color, blend fraction, mode name).
    Input(String),
    /// JSON encoding or decoding failed.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Grid(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Grid(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<GridError> for CliError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::Io(msg) => CliError::Io(msg),
            GridError::InvalidFormat(_) | GridError::UnknownMode(_) => CliError::Input(e.to_string()),
            other => CliError::Grid(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}
