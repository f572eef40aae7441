//! Flick: a minimal command-line screen capture tool.
//!
//! This binary resolves the command line into the effective capture
//! configuration, failing early with a useful message when an option
//! does not parse.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{debug, error};

use flick::args::Args;
use flick::options::Options;

/// Main entry point for the flick binary.
///
/// Initializes logging, parses the command line and resolves it into
/// the effective capture configuration.
fn main() -> Result<()> {
    // Extra positionals are reported through warn!, so warnings must be
    // visible without RUST_LOG set.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let options = Options::from_args(&args).map_err(|e| {
        error!("{e}");
        e
    })?;
    debug!("effective options: {options:?}");
    Ok(())
}
