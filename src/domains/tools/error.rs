//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool operations.
///
/// These surface at the rmcp boundary as protocol-level errors; recoverable
/// conditions (missing credential, upstream failures, empty results) are
/// reported as soft error results instead and never reach this type.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
