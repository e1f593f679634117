//! Record identifiers.
//!
//! Ids are Unix-epoch milliseconds taken at creation time. Fixture records
//! use small hand-picked ids (1, 2, 3...), which never clash with a timestamp.

use chrono::{DateTime, Utc};

/// Identifier shared by every record collection.
pub type RecordId = i64;

/// Timestamp-based id for a record created at `now`.
#[must_use]
pub fn timestamp_id(now: DateTime<Utc>) -> RecordId {
    now.timestamp_millis()
}

/// Timestamp-based id bumped past every id already in use.
///
/// Two records created within the same millisecond still get distinct ids.
#[must_use]
pub fn next_id<I>(now: DateTime<Utc>, existing: I) -> RecordId
where
    I: IntoIterator<Item = RecordId>,
{
    let candidate = timestamp_id(now);
    existing
        .into_iter()
        .max()
        .map_or(candidate, |max| candidate.max(max.saturating_add(1)))
}
