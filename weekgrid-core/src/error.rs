//! Error types for the weekgrid crates.

use thiserror::Error;

/// Errors that can occur when preparing or laying out a week grid.
#[derive(Error, Debug)]
pub enum WeekGridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid grid: {0}")]
    Grid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for weekgrid operations.
pub type WeekGridResult<T> = Result<T, WeekGridError>;
