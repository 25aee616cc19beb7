//! Error types for the protocol layer.

use thiserror::Error;

/// Errors arising from unexpected response-line content.
///
/// Every variant carries the offending line (or the expected/actual pair)
/// because the most common real-world cause is a UPS-identifier mismatch,
/// and the raw lines are what the caller needs to diagnose it.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The BEGIN line of a list reply did not match byte-for-byte.
    #[error("unexpected list begin: expected {expected:?}, got {actual:?}; check the UPS identifier")]
    BadListBegin {
        /// The line the client required.
        expected: String,
        /// The line the server actually sent.
        actual: String,
    },

    /// `LIST UPS` completed without a single UPS row.
    #[error("no UPS units listed by the server")]
    NoUpsListed,

    /// A UPS row too short to carry an identifier and a description.
    #[error("malformed UPS row: {line:?}")]
    MalformedUpsRow {
        /// The offending row.
        line: String,
    },

    /// A GET VAR reply with fewer tokens than the identifier width allows.
    #[error("short GET VAR reply (need at least {min_tokens} tokens): {line:?}; check the UPS identifier")]
    ShortReply {
        /// The offending reply line.
        line: String,
        /// Minimum token count computed from the identifier actually sent.
        min_tokens: usize,
    },
}
