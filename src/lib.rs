//! hastatus library
//!
//! Fetches one statistics snapshot from a HAProxy control socket and turns it
//! into strongly-typed status entities. The pipeline is linear and
//! synchronous: raw bytes -> raw rows -> classified entities -> aggregated
//! status map. Every value is an immutable snapshot of one query; nothing is
//! cached or retried.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use hastatus::{fetch_snapshot, parse_stat_table, classify_table, statuses};
//!
//! # fn main() -> Result<(), hastatus::Error> {
//! let blob = fetch_snapshot(Path::new("/var/run/haproxy.sock"), None)?;
//! let table = parse_stat_table(&blob)?;
//! let entities = classify_table(&table)?;
//!
//! for e in entities.iter().filter(|e| e.is_server()) {
//!     println!("{} / {} => {:?}", e.proxy, e.name, e.health());
//! }
//!
//! let map = statuses(&entities);
//! println!("{} proxy groups", map.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fetch;
pub mod stats;

// Re-export main types for convenience
pub use error::{Error, FormatError};
pub use fetch::{fetch_snapshot, DEFAULT_SOCKET};
pub use stats::{
    classify_table, parse_stat_table, statuses, ClassifyMode, EntityKind, HealthCode, RawRow,
    RawTable, StatusEntity, StatusMap,
};
