//! Typed entity forms and the save path shared by all of them.
//!
//! A form holds exactly what an editor collects. Numeric inputs stay as raw
//! text until [`EntityForm::into_record`] parses them, so a rejected value is
//! reported as a [`ValidationError`] instead of being lost at input time.
//!
//! [`submit`] is the only way a form reaches a [`RecordStore`]: it resolves
//! the target id, validates, and then replaces or appends the whole record.
//! Validation failure leaves the store untouched.

mod ai_model;
mod glossary;
mod source;
mod user;

pub use ai_model::AiModelForm;
pub use glossary::GlossaryForm;
pub use source::SourceForm;
pub use user::UserForm;

use chrono::{DateTime, Utc};
use news_core::entities::Record;
use news_core::errors::ValidationError;
use news_core::ids::RecordId;

use crate::error::StoreError;
use crate::store::{RecordStore, SaveOutcome};

/// Editable view of one record kind.
pub trait EntityForm: Sized {
    type Record: Record;

    /// Form populated from a stored record, as opened for editing.
    fn prefill(record: &Self::Record) -> Self;

    /// Validate and build the full record.
    ///
    /// `existing` is the stored record when editing; fields the form does not
    /// carry are taken from it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in the kind's check order.
    fn into_record(
        self,
        existing: Option<&Self::Record>,
        id: RecordId,
        now: DateTime<Utc>,
    ) -> Result<Self::Record, ValidationError>;
}

/// A record that made it into its store.
#[derive(Debug, Clone, PartialEq)]
pub struct Saved<T> {
    pub record: T,
    pub outcome: SaveOutcome,
}

impl<T> Saved<T> {
    #[must_use]
    pub fn created(&self) -> bool {
        self.outcome == SaveOutcome::Created
    }
}

/// Validate `form` and write it to `store`.
///
/// `target` selects the record being edited; `None` creates a new record
/// with a fresh timestamp id.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] when `target` names no stored record and
/// [`StoreError::Validation`] when the form is rejected.
pub fn submit<F: EntityForm>(
    store: &mut RecordStore<F::Record>,
    form: F,
    target: Option<RecordId>,
    now: DateTime<Utc>,
) -> Result<Saved<F::Record>, StoreError> {
    let existing = match target {
        Some(id) => Some(store.get(id).ok_or(StoreError::NotFound {
            kind: <F::Record as Record>::KIND,
            id,
        })?),
        None => None,
    };
    let id = existing.map_or_else(|| store.next_id(now), Record::id);
    let record = form.into_record(existing, id, now)?;
    let outcome = store.save(record.clone());
    Ok(Saved { record, outcome })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use news_core::entities::GlossaryTerm;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).single().expect("valid timestamp")
    }

    fn form(term: &str) -> GlossaryForm {
        GlossaryForm {
            term: term.into(),
            definition: "Application Programming Interface".into(),
            category: "Tech".into(),
        }
    }

    #[test]
    fn create_uses_timestamp_id() {
        let mut store = RecordStore::<GlossaryTerm>::new();
        let saved = submit(&mut store, form("API"), None, at(1_000)).unwrap();
        assert!(saved.created());
        assert_eq!(saved.record.id, 1_000);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn edit_keeps_id_and_replaces() {
        let mut store = RecordStore::<GlossaryTerm>::new();
        let first = submit(&mut store, form("API"), None, at(1_000)).unwrap();
        let saved = submit(&mut store, form("REST API"), Some(first.record.id), at(2_000)).unwrap();
        assert_eq!(saved.outcome, SaveOutcome::Replaced);
        assert_eq!(saved.record.id, 1_000);
        assert_eq!(store.list()[0].term, "REST API");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn edit_of_missing_record_is_not_found() {
        let mut store = RecordStore::<GlossaryTerm>::new();
        let err = submit(&mut store, form("API"), Some(9), at(1_000)).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 9, .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn rejected_form_leaves_store_untouched() {
        let mut store = RecordStore::<GlossaryTerm>::new();
        let err = submit(&mut store, form(""), None, at(1_000)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::MissingField { field: "term" })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn same_millisecond_creates_get_distinct_ids() {
        let mut store = RecordStore::<GlossaryTerm>::new();
        let a = submit(&mut store, form("API"), None, at(5_000)).unwrap();
        let b = submit(&mut store, form("SDK"), None, at(5_000)).unwrap();
        assert_ne!(a.record.id, b.record.id);
    }
}
