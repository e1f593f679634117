//! Two-step deletion: request a [`PendingDeletion`], then confirm it.

use news_core::enums::EntityKind;
use news_core::ids::RecordId;

/// A delete that has been asked for but not yet carried out.
///
/// Dropping the value cancels the delete.
#[must_use = "a pending deletion does nothing until it is confirmed"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    kind: EntityKind,
    id: RecordId,
    title: String,
    message: String,
}

impl PendingDeletion {
    pub(crate) fn new(kind: EntityKind, id: RecordId) -> Self {
        let label = kind.label();
        Self {
            kind,
            id,
            title: format!("Delete {label}"),
            message: format!(
                "Are you sure you want to delete this {label}? This action cannot be undone."
            ),
        }
    }

    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    pub const fn id(&self) -> RecordId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_kind() {
        let pending = PendingDeletion::new(EntityKind::Source, 4);
        assert_eq!(pending.title(), "Delete source");
        assert_eq!(
            pending.message(),
            "Are you sure you want to delete this source? This action cannot be undone."
        );
        assert_eq!(pending.id(), 4);
    }
}
