use chrono::{DateTime, Utc};
use news_core::entities::AiModel;
use news_core::enums::{ModelFeature, ModelProvider};
use news_core::errors::ValidationError;
use news_core::ids::RecordId;
use news_core::validation::{
    TEMPERATURE_RANGE, float_in_range, non_negative_float, required, unsigned_integer,
};

use super::EntityForm;

/// Editable AI model fields. Numeric inputs are raw text.
///
/// `addedDate`, `lastUsed` and `usageCount` are tracked by the store, not
/// the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiModelForm {
    pub name: String,
    pub provider: ModelProvider,
    pub model_id: String,
    pub api_key: String,
    pub cost_per_token: String,
    pub max_tokens: String,
    pub temperature: String,
    pub is_active: bool,
    pub features: Vec<ModelFeature>,
}

impl Default for AiModelForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            provider: ModelProvider::default(),
            model_id: String::new(),
            api_key: String::new(),
            cost_per_token: "0.00003".into(),
            max_tokens: "4096".into(),
            temperature: "0.7".into(),
            is_active: true,
            features: Vec::new(),
        }
    }
}

impl EntityForm for AiModelForm {
    type Record = AiModel;

    fn prefill(record: &AiModel) -> Self {
        Self {
            name: record.name.clone(),
            provider: record.provider,
            model_id: record.model_id.clone(),
            api_key: record.api_key.clone(),
            cost_per_token: record.cost_per_token.to_string(),
            max_tokens: record.max_tokens.to_string(),
            temperature: record.temperature.to_string(),
            is_active: record.is_active,
            features: record.features.clone(),
        }
    }

    fn into_record(
        self,
        existing: Option<&AiModel>,
        id: RecordId,
        now: DateTime<Utc>,
    ) -> Result<AiModel, ValidationError> {
        required("name", &self.name)?;
        required("modelId", &self.model_id)?;
        required("apiKey", &self.api_key)?;
        let cost_per_token = non_negative_float("costPerToken", &self.cost_per_token)?;
        let temperature = float_in_range("temperature", &self.temperature, &TEMPERATURE_RANGE)?;
        let max_tokens = unsigned_integer("maxTokens", &self.max_tokens)?;

        let mut features: Vec<ModelFeature> = Vec::with_capacity(self.features.len());
        for feature in self.features {
            if !features.contains(&feature) {
                features.push(feature);
            }
        }

        Ok(AiModel {
            id,
            name: self.name,
            provider: self.provider,
            model_id: self.model_id,
            api_key: self.api_key,
            cost_per_token,
            max_tokens,
            temperature,
            is_active: self.is_active,
            features,
            added_date: existing.map_or(now, |model| model.added_date),
            last_used: existing.and_then(|model| model.last_used),
            usage_count: existing.map_or(0, |model| model.usage_count),
        })
    }
}
