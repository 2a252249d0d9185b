//! Error types for hastatus.
//!
//! All fallible operations in the library surface one of three kinds: an I/O
//! failure reaching the control socket, a malformed statistics table, or a row
//! whose type code cannot be classified. Nothing is retried and nothing is
//! swallowed; callers inspect the kind and decide.

use std::io;
use std::path::PathBuf;

/// Top-level error for fetching, parsing and classifying one snapshot.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure reaching the control socket (connect, write, read).
    #[error("control socket {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The blob does not match the expected table shape. Fatal for the
    /// snapshot; no partial results are produced.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A row carried a type code outside "0".."3" and no fallback applies.
    /// Fatal rather than silently misclassifying a server as inert.
    #[error("unrecognized type code {type_code:?} for {proxy}/{name}")]
    Classification {
        proxy: String,
        name: String,
        type_code: String,
    },
}

/// Shape violations in the raw statistics table.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("no \"# \" header marker found in stats output")]
    MissingHeader,

    /// The trailing extra field every row carries is expected to be empty.
    /// A value here means the assumed format quirk no longer holds.
    #[error("data row {row} has non-empty trailing field {value:?}")]
    TrailingField { row: usize, value: String },

    #[error("data row {row} has {found} fields, header has {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("required column {name:?} missing from header")]
    MissingColumn { name: &'static str },
}
