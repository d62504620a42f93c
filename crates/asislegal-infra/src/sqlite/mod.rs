//! SQLite persistence for AsisLegal.
//!
//! Split reader/writer pools in WAL mode, raw queries with private Row
//! structs mapping SQLite rows to domain types.

pub mod chat;
pub mod document;
pub mod message;
pub mod pool;

use asislegal_types::error::RepositoryError;
use chrono::{DateTime, Utc};

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
