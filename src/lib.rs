//! Option-parsing front end for flick, a command-line screen capture
//! tool.
//!
//! Everything downstream of the command line (capture, encoding, window
//! handling) reads a single [`options::Options`] record; this crate owns
//! turning the raw argument vector into that record. Parsing never
//! terminates the process: every fatal condition surfaces as an
//! [`error::OptionsError`] so the binary decides the exit status and
//! embedders can report upward instead.

pub mod args;
pub mod error;
pub mod line;
pub mod number;
pub mod options;
pub mod subopt;
pub mod thumb;

pub use args::Args;
pub use error::OptionsError;
pub use options::Options;
