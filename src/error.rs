//! Error types for gridsq

use thiserror::Error;

/// Main error type for gridsq operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for gridsq operations
pub type Result<T> = std::result::Result<T, Error>;
