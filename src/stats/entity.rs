//! Classification of raw stats rows into typed status entities.
//!
//! Each row of the stats table describes either a whole proxy (its
//! `FRONTEND`/`BACKEND` aggregate line) or one member of it. The classifier
//! decodes the row's numeric type code into an [`EntityKind`], normalizes the
//! free-form status text into a [`HealthCode`], and derives whether the row
//! is an individual server that currently takes traffic.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, FormatError};
use crate::stats::parser::{RawRow, RawTable};

/// Reserved member names marking a proxy's aggregate rows.
pub const AGGREGATE_FRONTEND: &str = "FRONTEND";
pub const AGGREGATE_BACKEND: &str = "BACKEND";

/// What a stats row represents, decoded from the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Frontend,
    Backend,
    Server,
    Socket,
}

impl EntityKind {
    /// Decodes HAProxy's numeric type code. Anything outside `"0".."3"` is
    /// unknown and must be rejected by the caller.
    fn from_type_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Self::Frontend),
            "1" => Some(Self::Backend),
            "2" => Some(Self::Server),
            "3" => Some(Self::Socket),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Server => "server",
            Self::Socket => "socket",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized health derived from the free-form `status` string.
///
/// Totally ordered by severity of transition: `NoCheck` (unmonitored) through
/// `GoingUp` (down but recovering). `Unknown` covers everything the scheme
/// does not document, `MAINT` included; it is a sentinel, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum HealthCode {
    Unknown = -1,
    NoCheck = 0,
    Up = 1,
    /// Still up, health checks failing (`UP (going down)` and friends).
    GoingDown = 2,
    Down = 3,
    /// Still down, health checks recovering.
    GoingUp = 4,
}

impl HealthCode {
    /// Total mapping over all status strings. Exact matches are checked
    /// before prefixes so `"UP"` itself never falls into the prefix rule.
    pub fn from_status(status: &str) -> Self {
        match status {
            "UP" => Self::Up,
            "DOWN" => Self::Down,
            "no check" => Self::NoCheck,
            s if s.starts_with("UP") => Self::GoingDown,
            s if s.starts_with("DOWN") => Self::GoingUp,
            _ => Self::Unknown,
        }
    }

    /// The numeric code as exposed to callers and JSON output.
    pub const fn code(self) -> i8 {
        self as i8
    }
}

/// How rows of one snapshot are mapped to an [`EntityKind`].
///
/// The numeric type code is authoritative whenever the snapshot's header
/// declares a `type` column. The name-based rule (reserved `BACKEND` /
/// `FRONTEND` member names, everything else a server) is a weaker legacy
/// contract, selected only when that column is absent. The choice is made
/// once per table from the header, never inferred per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyMode {
    TypeCode,
    NameBased,
}

impl ClassifyMode {
    pub fn for_table(table: &RawTable) -> Self {
        if table.has_column("type") {
            Self::TypeCode
        } else {
            Self::NameBased
        }
    }
}

/// One classified stats row. An immutable snapshot value: built once per
/// fetch, discarded after consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntity {
    /// Logical service/group name (`pxname`).
    pub proxy: String,
    /// Member name within the group (`svname`); `BACKEND`/`FRONTEND` for
    /// aggregate rows.
    pub name: String,
    /// Verbatim numeric type code; `None` under [`ClassifyMode::NameBased`].
    pub raw_type: Option<String>,
    pub kind: EntityKind,
    /// Verbatim status text (`UP`, `DOWN`, `MAINT`, `UP (going down)`, ...).
    pub status: String,
    /// Verbatim `act` field (`"1"` when participating in load balancing).
    pub active: String,
}

fn required<'a>(row: &'a RawRow, name: &'static str) -> Result<&'a str, FormatError> {
    row.get(name).ok_or(FormatError::MissingColumn { name })
}

impl StatusEntity {
    /// Classifies one raw row under the given mode.
    pub fn from_row(row: &RawRow, mode: ClassifyMode) -> Result<Self, Error> {
        let proxy = required(row, "pxname")?.to_string();
        let name = required(row, "svname")?.to_string();
        let status = required(row, "status")?.to_string();
        let active = required(row, "act")?.to_string();

        let (raw_type, kind) = match mode {
            ClassifyMode::TypeCode => {
                let code = required(row, "type")?;
                let kind = EntityKind::from_type_code(code).ok_or_else(|| {
                    Error::Classification {
                        proxy: proxy.clone(),
                        name: name.clone(),
                        type_code: code.to_string(),
                    }
                })?;
                (Some(code.to_string()), kind)
            }
            ClassifyMode::NameBased => {
                let kind = match name.as_str() {
                    AGGREGATE_BACKEND => EntityKind::Backend,
                    AGGREGATE_FRONTEND => EntityKind::Frontend,
                    _ => EntityKind::Server,
                };
                (None, kind)
            }
        };

        Ok(Self {
            proxy,
            name,
            raw_type,
            kind,
            status,
            active,
        })
    }

    /// Normalized health derived from the status text. Total; see
    /// [`HealthCode::from_status`].
    pub fn health(&self) -> HealthCode {
        HealthCode::from_status(&self.status)
    }

    /// Whether this row is an individual proxied server rather than a
    /// frontend, backend aggregate or listening socket.
    pub fn is_server(&self) -> bool {
        self.kind == EntityKind::Server
    }

    /// A server currently participating in load balancing. Aggregate rows
    /// are never active regardless of their `act` field.
    pub fn is_active(&self) -> bool {
        self.is_server() && self.active == "1"
    }
}

/// Classifies every row of a parsed table, in source order. The classify
/// mode is fixed once from the table's header.
pub fn classify_table(table: &RawTable) -> Result<Vec<StatusEntity>, Error> {
    let mode = ClassifyMode::for_table(table);
    table
        .rows()
        .iter()
        .map(|row| StatusEntity::from_row(row, mode))
        .collect()
}
