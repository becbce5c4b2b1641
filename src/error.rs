//! # Error Types
//!
//! Structured error handling for the inference core using thiserror.
//! Store failures are fatal to a batch; everything the propagators can
//! resolve locally (skips, cycles) never surfaces here.

use thiserror::Error;

/// Errors that can abort an inference batch
#[derive(Error, Debug)]
pub enum PedigreeError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("data integrity error: {message}")]
    DataIntegrity { message: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl PedigreeError {
    /// Create a data integrity error
    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::DataIntegrity {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PedigreeError>;
