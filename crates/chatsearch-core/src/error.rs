//! Error types for chatsearch-core.
//!
//! The search bar itself never fails; errors come from the storage layer
//! (configuration loading and saving).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}
