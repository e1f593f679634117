use chrono::{DateTime, Utc};
use news_core::entities::GlossaryTerm;
use news_core::errors::ValidationError;
use news_core::ids::RecordId;
use news_core::validation::required;

use super::EntityForm;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossaryForm {
    pub term: String,
    pub definition: String,
    pub category: String,
}

impl EntityForm for GlossaryForm {
    type Record = GlossaryTerm;

    fn prefill(record: &GlossaryTerm) -> Self {
        Self {
            term: record.term.clone(),
            definition: record.definition.clone(),
            category: record.category.clone(),
        }
    }

    fn into_record(
        self,
        _existing: Option<&GlossaryTerm>,
        id: RecordId,
        _now: DateTime<Utc>,
    ) -> Result<GlossaryTerm, ValidationError> {
        required("term", &self.term)?;
        required("definition", &self.definition)?;
        Ok(GlossaryTerm {
            id,
            term: self.term,
            definition: self.definition,
            category: self.category,
        })
    }
}
