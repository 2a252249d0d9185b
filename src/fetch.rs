//! Snapshot fetcher for the HAProxy control socket.
//!
//! One operation: connect to the configured UNIX socket, send the fixed
//! `show stat` query and read until the peer closes the stream. The raw blob
//! is handed to the parser untouched; a truncated or empty response surfaces
//! there as a format error rather than being guessed at here.

use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::error::Error;

/// Canonical location of the HAProxy stats socket.
pub const DEFAULT_SOCKET: &str = "/var/run/haproxy.sock";

/// The fixed query issued per snapshot.
const STAT_COMMAND: &[u8] = b"show stat\n";

/// Fetches one raw stats snapshot from the control socket at `path`.
///
/// `timeout` bounds each individual read and write on the stream; `None`
/// blocks indefinitely. The stats table is ASCII, so stray invalid bytes are
/// replaced rather than failing the fetch.
pub fn fetch_snapshot(path: &Path, timeout: Option<Duration>) -> Result<String, Error> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut stream = UnixStream::connect(path).map_err(io_err)?;
    stream.set_read_timeout(timeout).map_err(io_err)?;
    stream.set_write_timeout(timeout).map_err(io_err)?;

    stream.write_all(STAT_COMMAND).map_err(io_err)?;

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).map_err(io_err)?;
    debug!(bytes = raw.len(), socket = %path.display(), "fetched stats snapshot");

    Ok(String::from_utf8_lossy(&raw).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_connect_failure_is_io_error() {
        let path = PathBuf::from("/nonexistent/hastatus-test.sock");
        let err = fetch_snapshot(&path, None).unwrap_err();
        match err {
            Error::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
