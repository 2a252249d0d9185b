//! Raw command implementation.
//!
//! Dumps the stats CSV exactly as returned by the socket. Diagnostic aid for
//! when the parsed view and the wire disagree.

use std::io::Write;

use crate::config::Config;
use hastatus::fetch_snapshot;

/// Fetches one snapshot and writes the raw blob to stdout, untouched.
pub fn command_raw(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let blob = fetch_snapshot(&config.socket_path(), config.timeout())?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(blob.as_bytes())?;
    Ok(())
}
