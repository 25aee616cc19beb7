//! Client for polling UPS telemetry from a monitoring daemon.
//!
//! The client speaks the line-oriented status-query protocol over a single
//! persistent TCP connection. Every operation is synchronous and blocking:
//! one command line is written, then the full reply (one line or a whole
//! list) is consumed before the call returns.
//!
//! # Example
//!
//! ```rust,ignore
//! use nutpoll_client::Session;
//!
//! let mut session = Session::connect("192.168.1.10")?; // port 3493 implied
//! session.authenticate("monuser", "secret")?;
//! let ups_id = session.identify()?;
//!
//! session.list_var(&ups_id)?;
//! let store = session.store();
//! println!("charge: {:?}", store.get("battery.charge"));
//!
//! let load = session.get_var(&ups_id, "ups.load")?;
//! ```
//!
//! # Concurrency
//!
//! A [`Session`] is single-threaded: the request/response matching assumes
//! strict alternation with no interleaving, and no internal locking is
//! provided. Only the [`VariableStore`] handle may be shared across
//! threads, with the partial-visibility caveat documented there.

mod channel;
mod error;
mod session;
mod store;

pub use channel::*;
pub use error::*;
pub use session::*;
pub use store::*;
