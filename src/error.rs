//! Error types for yamato-jobs.
//!
//! Uses thiserror for derive macros. Every variant maps to a process exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for job generation.
#[derive(Error, Debug)]
pub enum GenError {
    /// Bad arguments, unreadable input, or invalid config/metafile contents.
    #[error("{0}")]
    UserError(String),

    /// A generator dereferenced a descriptor field that is not present.
    #[error("{descriptor} is missing required field '{field}'")]
    MissingField { descriptor: String, field: String },

    /// A key field cannot be used to build a job identifier.
    #[error("invalid key '{key}' for {category} job: {reason}")]
    InvalidKey {
        category: String,
        key: String,
        reason: String,
    },

    /// Rendering or writing a job document failed.
    #[error("Output failed: {0}")]
    OutputError(String),
}

impl GenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::UserError(_) => exit_codes::USER_ERROR,
            GenError::MissingField { .. } => exit_codes::DESCRIPTOR_ERROR,
            GenError::InvalidKey { .. } => exit_codes::DESCRIPTOR_ERROR,
            GenError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }

    pub(crate) fn missing_field(descriptor: impl Into<String>, field: impl Into<String>) -> Self {
        GenError::MissingField {
            descriptor: descriptor.into(),
            field: field.into(),
        }
    }
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenError>;
