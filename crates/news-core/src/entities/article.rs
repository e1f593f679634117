use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::enums::EntityKind;
use crate::ids::RecordId;

/// A published news article. Read-only; only ever loaded from fixtures.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub author: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub read_time: String,
    pub image: String,
    pub content: String,
    pub featured: bool,
}

impl Record for Article {
    const KIND: EntityKind = EntityKind::Article;

    fn id(&self) -> RecordId {
        self.id
    }
}
