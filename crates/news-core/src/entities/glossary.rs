use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::enums::EntityKind;
use crate::ids::RecordId;

/// A glossary entry explaining a term readers may meet in articles.
///
/// `category` is free text (e.g. `"Tech"`), matched case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTerm {
    pub id: RecordId,
    pub term: String,
    pub definition: String,
    pub category: String,
}

impl Record for GlossaryTerm {
    const KIND: EntityKind = EntityKind::GlossaryTerm;

    fn id(&self) -> RecordId {
        self.id
    }
}
