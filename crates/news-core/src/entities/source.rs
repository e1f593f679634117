use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::enums::{EntityKind, SourceCategory};
use crate::ids::RecordId;

/// A news outlet articles are pulled from.
///
/// `last_updated` is restamped on every save.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: RecordId,
    pub name: String,
    pub url: String,
    pub category: SourceCategory,
    pub is_active: bool,
    pub credibility_score: f64,
    pub last_updated: DateTime<Utc>,
}

impl Record for Source {
    const KIND: EntityKind = EntityKind::Source;

    fn id(&self) -> RecordId {
        self.id
    }
}
