//! Splitting of `key=value,key=value,...` option arguments.
//!
//! The grammar matches `getsubopt(3)`: tokens are separated by commas,
//! each token is split at its first `=`, and a token without `=` is a
//! bare key. An empty input yields no tokens and a trailing comma is
//! ignored, but an empty token between two commas is still reported so
//! the caller can reject it.

/// One comma-separated token of a suboption list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubOpt<'a> {
    /// The token exactly as written, for error reporting.
    pub token: &'a str,
    pub key: &'a str,
    /// `None` for a bare key, `Some("")` for `key=`.
    pub value: Option<&'a str>,
}

pub fn iter(input: &str) -> impl Iterator<Item = SubOpt<'_>> {
    input
        .split_terminator(',')
        .map(|token| match token.split_once('=') {
            Some((key, value)) => SubOpt {
                token,
                key,
                value: Some(value),
            },
            None => SubOpt {
                token,
                key: token,
                value: None,
            },
        })
}
