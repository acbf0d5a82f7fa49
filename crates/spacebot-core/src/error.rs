//! SpaceBot error types.

use thiserror::Error;

/// Result alias used across SpaceBot crates.
pub type Result<T> = std::result::Result<T, SpaceBotError>;

#[derive(Debug, Error)]
pub enum SpaceBotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
