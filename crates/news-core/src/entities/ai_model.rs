use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::enums::{EntityKind, ModelFeature, ModelProvider};
use crate::ids::RecordId;

/// Configuration of an AI model used for article analysis.
///
/// `added_date`, `last_used` and `usage_count` are not editable; an edit
/// carries them over from the stored record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiModel {
    pub id: RecordId,
    pub name: String,
    pub provider: ModelProvider,
    pub model_id: String,
    pub api_key: String,
    pub cost_per_token: f64,
    pub max_tokens: u32,
    pub temperature: f64,
    pub is_active: bool,
    pub features: Vec<ModelFeature>,
    pub added_date: DateTime<Utc>,
    pub last_used: Option<DateTime<Utc>>,
    pub usage_count: u64,
}

impl Record for AiModel {
    const KIND: EntityKind = EntityKind::AiModel;

    fn id(&self) -> RecordId {
        self.id
    }
}
