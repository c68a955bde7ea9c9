// error.rs - Configuration and construction errors

use thiserror::Error;

/// Errors raised while building a grid or loading a configuration.
///
/// Stepping never fails; extinction is reported through the step result.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Grid dimensions must be at least 1x1.
    #[error("invalid grid size {rows}x{cols}: both dimensions must be > 0")]
    InvalidSize { rows: usize, cols: usize },

    /// Initial alive probability outside [0, 1] (or NaN).
    #[error("invalid density {0}: must be within [0, 1]")]
    InvalidDensity(f64),

    /// A seeded cell does not fit the grid.
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("failed to read or write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
