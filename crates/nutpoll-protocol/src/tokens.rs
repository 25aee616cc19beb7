//! Tokenizing and quoting for protocol lines.
//!
//! Every response line is interpreted token by token, where a token is a
//! run of characters between single spaces. Quoted values may span several
//! tokens (the quotes wrap the value once, they do not re-delimit it), so
//! recovering a value means rejoining its tokens before stripping quotes.

/// Wrap a string in double quotes.
///
/// The protocol has no escaping scheme: a value containing a literal `"`
/// produces an ambiguous line. The observed protocol never emits one, so
/// this is left as an unvalidated constraint rather than an error.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", s)
}

/// Strip exactly one surrounding pair of double quotes, if both are present.
pub fn unquote(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Split a protocol line on single spaces.
///
/// Consecutive spaces yield empty tokens that are preserved positionally,
/// not collapsed: token position is load-bearing and must not shift.
pub fn split_tokens(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

/// Rejoin `tokens[from..]` with single spaces and unquote the result.
///
/// Recovers a value whose original form may have contained spaces and was
/// wrapped once in quotes by the server. An out-of-range `from` yields an
/// empty string.
pub fn unquote_join(tokens: &[&str], from: usize) -> String {
    let joined = tokens.get(from..).unwrap_or(&[]).join(" ");
    unquote(&joined).to_string()
}

/// Number of tokens a string occupies once embedded in a space-split line.
///
/// A UPS identifier with N embedded spaces spans N+1 tokens and shifts the
/// position of every subsequent field in a response line by N. Sessions
/// recompute this whenever the identifier changes.
pub fn token_width(s: &str) -> usize {
    s.split(' ').count()
}
