//! Error types

use crate::types::JobId;
use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Job not found: #{0}")]
    NotFound(JobId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
