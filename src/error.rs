//! Parse failures, one variant per fatal condition.
//!
//! The messages carry the offending argument so the single line printed
//! by the binary is enough to correct the invocation.

use thiserror::Error;

/// Everything that can go wrong while interpreting the argument vector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// The value has no numeric prefix at all.
    #[error("the option is not a number: {0}")]
    NotANumber(String),

    /// The value does not fit a signed 32-bit integer.
    #[error("number out of range: {0}")]
    OutOfRange(String),

    /// A recognized suboption key came without a usable value.
    #[error("missing value for suboption '{0}'")]
    MissingSuboptValue(&'static str),

    /// A recognized suboption key carried a value outside its vocabulary.
    #[error("unknown value for suboption '{key}': {value}")]
    UnknownSuboptValue {
        key: &'static str,
        value: String,
    },

    /// A numeric suboption value fell outside its allowed range.
    #[error("value out of range ({lo}..{hi}) for suboption '{key}': {value}")]
    SuboptOutOfRange {
        key: &'static str,
        lo: i32,
        hi: i32,
        value: i32,
    },

    /// A suboption token whose key is not in the vocabulary.
    #[error("no match found for token: '{0}'")]
    NoMatchForToken(String),

    /// `--autoselect` did not receive exactly four comma-separated values.
    #[error("option 'autoselect' requires 4 arguments")]
    AutoselectCount,

    /// `--autoselect` received a value without any comma at all.
    #[error("invalid format for option 'autoselect'")]
    AutoselectFormat,

    /// `--select` received a mode outside capture/hide/hole.
    #[error("unknown selection mode: {0}")]
    UnknownSelection(String),

    /// `--note` received an empty string.
    #[error("missing text for option 'note'")]
    EmptyNote,

    /// The output filename exceeds the accepted length.
    #[error("output filename too long ({0} bytes, max 256)")]
    FilenameTooLong(usize),
}
