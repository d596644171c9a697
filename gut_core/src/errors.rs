//! # Error Types
//!
//! Structured error types for gut_core. The ranking pipeline itself is total
//! (scores can never leave their range), so these errors only surface at the
//! edges: looking up an action by id, reading or writing files, and parsing
//! a previously exported CSV.
//!
//! ## Example
//!
//! ```rust
//! use gut_core::errors::{GutError, GutResult};
//!
//! fn parse_id(raw: &str) -> GutResult<u32> {
//!     raw.trim().parse().map_err(|_| {
//!         GutError::invalid_input("id", raw, "Action id must be a positive integer")
//!     })
//! }
//!
//! assert!(parse_id("6").is_ok());
//! assert!(parse_id("six").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for gut_core operations
pub type GutResult<T> = Result<T, GutError>;

/// Structured error type for GUT matrix operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GutError {
    /// An input value is invalid (malformed, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No action with this id exists in the worksheet
    #[error("Unknown action id: {id}")]
    UnknownAction { id: u32 },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON or CSV serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// A parsed export row is inconsistent with the ranking rules
    #[error("Export mismatch at line {line}: {reason}")]
    ExportMismatch { line: u64, reason: String },
}

impl GutError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GutError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownAction error
    pub fn unknown_action(id: u32) -> Self {
        GutError::UnknownAction { id }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        GutError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        GutError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create an ExportMismatch error
    pub fn export_mismatch(line: u64, reason: impl Into<String>) -> Self {
        GutError::ExportMismatch {
            line,
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GutError::InvalidInput { .. } => "INVALID_INPUT",
            GutError::UnknownAction { .. } => "UNKNOWN_ACTION",
            GutError::FileError { .. } => "FILE_ERROR",
            GutError::SerializationError { .. } => "SERIALIZATION_ERROR",
            GutError::ExportMismatch { .. } => "EXPORT_MISMATCH",
        }
    }
}

impl From<csv::Error> for GutError {
    fn from(err: csv::Error) -> Self {
        GutError::serialization(err.to_string())
    }
}
