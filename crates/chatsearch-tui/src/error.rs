//! Error types for chatsearch-tui.

use std::io;
use thiserror::Error;

use chatsearch_core::AppError;
use chatsearch_core::error::StorageError;

/// TUI-specific error type.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal I/O error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] AppError),

    /// Log file could not be opened or the logger was already set.
    #[error("Logger error: {0}")]
    Logger(String),

    /// Message store could not be read.
    #[error("Message store error at {path}: {message}")]
    Store { path: String, message: String },
}

/// Result type alias for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

impl From<StorageError> for TuiError {
    fn from(err: StorageError) -> Self {
        TuiError::Config(AppError::from(err))
    }
}
