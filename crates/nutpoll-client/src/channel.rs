//! Buffered line channel over a TCP stream.
//!
//! The protocol has no framing beyond the newline: writes append exactly
//! one `\n`, reads consume up to and including one `\n` and return the line
//! with the terminator stripped.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream};

use tracing::trace;

use crate::error::ClientResult;

/// Default server port used when an address carries none.
pub const DEFAULT_PORT: u16 = 3493;

/// A newline-framed text channel over a TCP stream.
///
/// The channel imposes no timeout of its own; a caller wanting a deadline
/// must set one on the socket before handing it over.
#[derive(Debug)]
pub struct LineChannel {
    writer: TcpStream,
    reader: BufReader<TcpStream>,
}

impl LineChannel {
    /// Wrap a connected stream.
    pub fn new(stream: TcpStream) -> io::Result<LineChannel> {
        let reader = BufReader::new(stream.try_clone()?);
        Ok(LineChannel {
            writer: stream,
            reader,
        })
    }

    /// Write one line, appending the newline terminator.
    pub fn write_line(&mut self, line: &str) -> ClientResult<()> {
        trace!("send: {}", line);
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read one line, blocking until its newline terminator arrives.
    ///
    /// A `\r` preceding the `\n` is stripped with it, tolerating CRLF
    /// framing from non-standard servers.
    ///
    /// End of stream before any terminator is a transport error: the server
    /// never half-closes mid-reply in this protocol.
    pub fn read_line(&mut self) -> ClientResult<String> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed by server",
            )
            .into());
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        trace!("recv: {}", line);
        Ok(line)
    }

    /// Shut the connection down in both directions.
    pub fn close(&self) -> ClientResult<()> {
        self.writer.shutdown(Shutdown::Both)?;
        Ok(())
    }
}
