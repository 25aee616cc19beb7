//! Response-line classification.
//!
//! The server frames every reply as one or more single lines. The first
//! token of a line names its kind; everything after it is positional and is
//! parsed by the session layer with the identifier width applied.

/// Kind of a response line, keyed by its first token.
///
/// Classification is total over arbitrary lines: a first token outside the
/// fixed marker set maps to [`ResponseKind::Other`], the designated
/// catch-all that read loops treat as a terminator instead of looping
/// forever on unexpected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Acknowledgement (`OK ...`).
    Ok,
    /// List-begin marker (`BEGIN ...`).
    Begin,
    /// List-end marker (`END ...`).
    End,
    /// Variable data row (`VAR ...`).
    Var,
    /// UPS identity row (`UPS ...`).
    Ups,
    /// Server-reported error (`ERR ...`).
    Err,
    /// Any other first token; terminates list read loops.
    Other,
}

impl ResponseKind {
    /// Classify a line by its first token.
    pub fn classify(line: &str) -> ResponseKind {
        match line.split(' ').next().unwrap_or("") {
            "OK" => ResponseKind::Ok,
            "BEGIN" => ResponseKind::Begin,
            "END" => ResponseKind::End,
            "VAR" => ResponseKind::Var,
            "UPS" => ResponseKind::Ups,
            "ERR" => ResponseKind::Err,
            _ => ResponseKind::Other,
        }
    }
}
