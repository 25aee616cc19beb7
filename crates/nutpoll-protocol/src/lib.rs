//! UPS status-query protocol (client subset).
//!
//! This crate provides the pure protocol layer for talking to a UPS
//! monitoring daemon over its line-oriented text protocol. It contains no
//! I/O; the companion client crate owns the connection.
//!
//! # Protocol Overview
//!
//! The protocol is a simple line-based text interface:
//!
//! - **Commands** (client → server): Space-delimited text lines terminated
//!   with `\n`. Free-form arguments (UPS identifiers, variable names) are
//!   wrapped in double quotes; bare verbs and credentials are not.
//! - **Responses** (server → client): Single lines whose first token names
//!   the response kind (`OK`, `BEGIN`, `END`, `VAR`, `UPS`, `ERR`). List
//!   replies span multiple lines bounded by `BEGIN` and `END` markers.
//!
//! All structure is positional within space-delimited lines. The one tricky
//! part is that a UPS identifier may itself contain literal spaces, so it
//! occupies a variable number of tokens and shifts the position of every
//! field after it. [`token_width`] computes that shift; response parsing
//! must apply it before indexing into a line.
//!
//! # Example
//!
//! ```rust,ignore
//! use nutpoll_protocol::{Command, ResponseKind};
//!
//! // Build a command line
//! let line = Command::GetVar("ups1".to_string(), "battery.charge".to_string()).encode();
//! assert_eq!(line, "GET VAR \"ups1\" \"battery.charge\"");
//!
//! // Classify a response line
//! let kind = ResponseKind::classify("VAR ups1 battery.charge \"100\"");
//! ```

mod commands;
mod error;
mod responses;
mod tokens;

pub use commands::*;
pub use error::*;
pub use responses::*;
pub use tokens::*;
