//! # API Error Type
//!
//! Unified error type for shell commands, plus startup failures.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in TableTreat                             │
//! │                                                                         │
//! │  > time 17:00                                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  →  Result<CommandResponse, ApiError>         │  │
//! │  │         │                                                        │  │
//! │  │  Core rejects? ── CoreError::Validation(..) ──► ApiError ──────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "VALIDATION_ERROR", "message": "time must be one of: .." }  │
//! │                                                                         │
//! │  The session is unchanged and the shell keeps reading commands.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::Serialize;
use tabletreat_core::{CoreError, ValidationError};
use thiserror::Error;

/// API error returned from shell commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item 201 is not in the cart"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Restaurant, menu item or cart line not found
    NotFound,

    /// Input validation failed (bad date, time, guest count, syntax)
    ValidationError,

    /// Section not reachable yet
    IllegalTransition,

    /// Anything else (e.g. rendering failed)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::RestaurantNotFound(_)
            | CoreError::MenuItemNotFound(_)
            | CoreError::CartLineNotFound(_) => ErrorCode::NotFound,
            CoreError::IllegalTransition { .. } => ErrorCode::IllegalTransition,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };

        // Validation messages read better without the "Validation error:" prefix
        let message = match err {
            CoreError::Validation(inner) => inner.to_string(),
            other => other.to_string(),
        };

        ApiError::new(code, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Failures before the shell starts reading commands.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Catalog file could not be read.
    #[error("Could not read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file was read but is not a valid catalog.
    #[error("Invalid catalog {path}: {source}")]
    CatalogInvalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    /// A configuration value could not be parsed.
    #[error("Invalid configuration {key}: {reason}")]
    Config { key: String, reason: String },
}
