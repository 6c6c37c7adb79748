//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while serving the stdio transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The rmcp service failed to start on stdin/stdout.
    #[error("Failed to start stdio transport: {0}")]
    Startup(String),

    /// The running service terminated abnormally.
    #[error("Transport terminated: {0}")]
    Terminated(String),
}
