//! Session operations over one connection.
//!
//! A session walks through up to four protocol interactions: authenticate
//! (optional), identify the UPS (or set its identifier manually), bulk-list
//! variables into the shared store, and fetch single variables. Each one is
//! a strict write-then-read exchange on the owned line channel.

use std::borrow::Cow;
use std::net::TcpStream;

use tracing::{debug, warn};

use nutpoll_protocol::{
    quote, split_tokens, token_width, unquote, unquote_join, Command, ProtocolError, ResponseKind,
};

use crate::channel::{LineChannel, DEFAULT_PORT};
use crate::error::ClientResult;
use crate::store::VariableStore;

/// Acknowledgement marker the server sends once a login is accepted
/// (`OK` followed by a list-context letter, e.g. `OK LOGGED`).
const AUTH_ACK_PREFIX: &str = "OK L";

/// One conversation with the monitoring daemon over a persistent connection.
///
/// The session holds the currently established UPS identifier together with
/// its pre-computed token width. An identifier containing N embedded spaces
/// shifts every subsequent token position in a response line by N, so the
/// width is recomputed whenever the identifier changes and applied to all
/// positional parsing.
///
/// Operations must not be interleaved: every call writes one command line
/// and consumes its full reply before returning, and the response matching
/// relies on that strict alternation. Use a session from one thread at a
/// time.
#[derive(Debug)]
pub struct Session {
    channel: LineChannel,
    ups_id: Option<String>,
    ups_id_width: usize,
    store: VariableStore,
}

impl Session {
    /// Connect to a server address, with a fresh variable store.
    ///
    /// When `addr` does not name a port, the default port 3493 is appended.
    pub fn connect(addr: &str) -> ClientResult<Session> {
        Session::connect_with_store(addr, VariableStore::new())
    }

    /// Connect using a caller-owned variable store.
    ///
    /// Useful when the consumer reading telemetry is not the code driving
    /// the session.
    pub fn connect_with_store(addr: &str, store: VariableStore) -> ClientResult<Session> {
        let addr = ensure_port(addr);
        debug!("connecting to {}", addr);
        let stream = TcpStream::connect(&*addr)?;
        Ok(Session {
            channel: LineChannel::new(stream)?,
            ups_id: None,
            ups_id_width: 0,
            store,
        })
    }

    /// Log into a credential-protected server.
    ///
    /// Run this immediately after connecting if the server requires it.
    /// The username and password are sent as two separate commands, each
    /// acknowledged independently; acknowledgement lines are then consumed
    /// and discarded until the login marker appears.
    pub fn authenticate(&mut self, username: &str, password: &str) -> ClientResult<()> {
        debug!("authenticating as {}", username);
        self.channel
            .write_line(&Command::Username(username.to_string()).encode())?;
        self.channel
            .write_line(&Command::Password(password.to_string()).encode())?;
        loop {
            let line = self.channel.read_line()?;
            if line.starts_with(AUTH_ACK_PREFIX) {
                return Ok(());
            }
        }
    }

    /// Detect the identifier of the connected UPS.
    ///
    /// Sends `LIST UPS` and extracts the identifier from the retained UPS
    /// row. This only pins down a single unit when the server has exactly
    /// one UPS registered; with several, the last row wins. The identifier
    /// is stored in the session and returned.
    pub fn identify(&mut self) -> ClientResult<String> {
        self.channel.write_line(&Command::ListUps.encode())?;
        let mut ups_row: Option<String> = None;
        loop {
            let line = self.channel.read_line()?;
            match ResponseKind::classify(&line) {
                ResponseKind::Ups => ups_row = Some(line),
                ResponseKind::End => break,
                _ => {}
            }
        }
        let row = ups_row.ok_or(ProtocolError::NoUpsListed)?;
        let id = extract_identifier(&row)?;
        self.set_identifier(&id);
        debug!("identified UPS {:?}", id);
        Ok(id)
    }

    /// Set the UPS identifier manually, without a protocol exchange.
    ///
    /// The identifier's token width is recomputed here; all subsequent
    /// response parsing depends on it.
    pub fn set_identifier(&mut self, ups_id: &str) {
        self.ups_id = Some(ups_id.to_string());
        self.ups_id_width = token_width(ups_id);
    }

    /// The currently established UPS identifier, if any.
    pub fn identifier(&self) -> Option<&str> {
        self.ups_id.as_deref()
    }

    /// Handle to the session's variable store.
    pub fn store(&self) -> VariableStore {
        self.store.clone()
    }

    /// Refresh the variable store with every variable of the given UPS.
    ///
    /// The reply must open with a `BEGIN LIST VAR "<id>"` line matching the
    /// request byte-for-byte; each following `VAR "<id>" ...` row stores
    /// one (name, value) entry. The first line of any other shape ends the
    /// loop (normally the END row, defensively anything).
    ///
    /// On error the store may already hold a partial update from the rows
    /// read before the failure; it is never rolled back.
    pub fn list_var(&mut self, ups_id: &str) -> ClientResult<()> {
        self.track_identifier(ups_id);
        self.channel
            .write_line(&Command::ListVar(ups_id.to_string()).encode())?;

        let expected = format!("BEGIN LIST VAR {}", quote(ups_id));
        let begin = self.channel.read_line()?;
        if begin != expected {
            return Err(ProtocolError::BadListBegin {
                expected,
                actual: begin,
            }
            .into());
        }

        let row_prefix = format!("VAR {} ", quote(ups_id));
        let name_index = 1 + self.ups_id_width;
        let mut count = 0usize;
        loop {
            let line = self.channel.read_line()?;
            if !line.starts_with(&row_prefix) {
                if ResponseKind::classify(&line) != ResponseKind::End {
                    warn!("variable list ended on unexpected line: {}", line);
                }
                break;
            }
            let tokens = split_tokens(&line);
            match tokens.get(name_index) {
                Some(name) => {
                    let value = unquote_join(&tokens, name_index + 1);
                    self.store.insert(unquote(name), &value);
                    count += 1;
                }
                None => {
                    warn!("variable row too short, ending list: {}", line);
                    break;
                }
            }
        }
        debug!("stored {} variables for {:?}", count, ups_id);
        Ok(())
    }

    /// Fetch the current value of a single variable of the given UPS.
    pub fn get_var(&mut self, ups_id: &str, var_name: &str) -> ClientResult<String> {
        self.track_identifier(ups_id);
        self.channel
            .write_line(&Command::GetVar(ups_id.to_string(), var_name.to_string()).encode())?;
        let line = self.channel.read_line()?;
        let tokens = split_tokens(&line);
        // Reply shape: VAR <id tokens..> <name> <value tokens..>, so the
        // minimum is marker + identifier width + name + one value token.
        let min_tokens = 3 + self.ups_id_width;
        if tokens.len() < min_tokens {
            return Err(ProtocolError::ShortReply { line, min_tokens }.into());
        }
        Ok(unquote_join(&tokens, 2 + self.ups_id_width))
    }

    /// Shut the connection down.
    pub fn close(self) -> ClientResult<()> {
        self.channel.close()
    }

    /// Adopt the identifier actually being sent, recomputing its token
    /// width, so positional parsing always matches the outgoing command.
    fn track_identifier(&mut self, ups_id: &str) {
        if self.ups_id.as_deref() != Some(ups_id) {
            self.set_identifier(ups_id);
        }
    }
}

/// Append the default port when the address does not name one.
///
/// An address carries a port when the suffix after the last `:` parses as
/// one and the host part is either colon-free or bracketed. Anything else,
/// including a bare IPv6 address such as `::1`, gets the default appended;
/// bare IPv6 hosts are bracketed so the port separator stays unambiguous.
fn ensure_port(addr: &str) -> Cow<'_, str> {
    let has_port = addr.rsplit_once(':').map_or(false, |(host, port)| {
        port.parse::<u16>().is_ok()
            && (!host.contains(':') || (host.starts_with('[') && host.ends_with(']')))
    });
    if has_port {
        Cow::Borrowed(addr)
    } else if addr.contains(':') && !addr.starts_with('[') {
        Cow::Owned(format!("[{}]:{}", addr, DEFAULT_PORT))
    } else {
        Cow::Owned(format!("{}:{}", addr, DEFAULT_PORT))
    }
}

/// Extract the UPS identifier from a `UPS ...` row.
///
/// Row shape: `UPS <id tokens..> "<description..>"`. The identifier may
/// contain spaces but is never quoted in this row, while the trailing
/// description always is, so the identifier is everything between the row
/// marker and the first quoted token.
fn extract_identifier(row: &str) -> Result<String, ProtocolError> {
    let tokens = split_tokens(row);
    let description_start = tokens
        .iter()
        .position(|token| token.starts_with('"'))
        .unwrap_or(tokens.len());
    if description_start < 2 {
        return Err(ProtocolError::MalformedUpsRow {
            line: row.to_string(),
        });
    }
    Ok(tokens[1..description_start].join(" "))
}
