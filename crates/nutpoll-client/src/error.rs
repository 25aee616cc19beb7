//! Error types for the client.

use nutpoll_protocol::ProtocolError;
use thiserror::Error;

/// Errors that can occur during a session operation.
///
/// Neither kind is retried internally: transport failures are fatal to the
/// current operation and reconnection is the caller's decision; protocol
/// failures surface the offending lines unchanged for diagnosis.
#[derive(Debug, Error)]
pub enum ClientError {
    /// I/O failure or connection closure on the underlying stream.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// Unexpected response-line content.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
