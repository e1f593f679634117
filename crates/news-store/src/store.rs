//! Ordered in-memory collection for one entity kind.

use chrono::{DateTime, Utc};
use news_core::entities::Record;
use news_core::ids::{RecordId, next_id};

/// What [`RecordStore::save`] did with the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No record had the id; it was appended.
    Created,
    /// A record with the same id was replaced in place.
    Replaced,
}

/// Records of one kind, kept in insertion order.
///
/// Ids are unique. An update replaces the whole record at its existing
/// position, so the order never changes on edit.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a store from seed records. A repeated id replaces the earlier
    /// record, keeping ids unique.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.save(record);
        }
        store
    }

    /// Current records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[T] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(Record::id)
    }

    /// Fresh timestamp id that no stored record uses.
    #[must_use]
    pub fn next_id(&self, now: DateTime<Utc>) -> RecordId {
        next_id(now, self.ids())
    }

    /// Replace the record with the same id, or append it.
    pub fn save(&mut self, record: T) -> SaveOutcome {
        let id = record.id();
        if let Some(slot) = self.records.iter_mut().find(|existing| existing.id() == id) {
            *slot = record;
            tracing::debug!(kind = T::KIND.as_str(), id, "replaced record");
            SaveOutcome::Replaced
        } else {
            self.records.push(record);
            tracing::debug!(kind = T::KIND.as_str(), id, "appended record");
            SaveOutcome::Created
        }
    }

    /// Remove the record with `id`. Absent ids are a no-op.
    pub fn delete(&mut self, id: RecordId) -> Option<T> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        tracing::debug!(kind = T::KIND.as_str(), id, "deleted record");
        Some(self.records.remove(index))
    }
}
