//! Errors raised by the command shell around the screen.
//!
//! Task operations themselves never fail; only terminal I/O and replay
//! scripts can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid replay script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
