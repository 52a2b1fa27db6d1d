//! Error types for the shaper

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    /// The argument handed to the shaper was not text. Carries the observed type.
    #[error("Invalid input type: expected string, got {0}")]
    InvalidInputType(String),

    #[error("Invalid shaping options: {0}")]
    InvalidOptions(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShapeError>;
