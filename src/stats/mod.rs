//! Stats table parsing, classification and aggregation.

pub mod aggregate;
pub mod entity;
pub mod parser;

pub use aggregate::{statuses, StatusMap};
pub use entity::{classify_table, ClassifyMode, EntityKind, HealthCode, StatusEntity};
pub use parser::{parse_stat_table, RawRow, RawTable};
