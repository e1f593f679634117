use chrono::{DateTime, Utc};
use news_core::entities::Source;
use news_core::enums::SourceCategory;
use news_core::errors::ValidationError;
use news_core::ids::RecordId;
use news_core::validation::{CREDIBILITY_RANGE, absolute_url, float_in_range, required};

use super::EntityForm;

/// Credibility shown on a blank source form.
pub const DEFAULT_CREDIBILITY: &str = "7.5";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceForm {
    pub name: String,
    pub url: String,
    pub category: SourceCategory,
    pub is_active: bool,
    /// Raw text, parsed on save.
    pub credibility_score: String,
}

impl Default for SourceForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            category: SourceCategory::default(),
            is_active: true,
            credibility_score: DEFAULT_CREDIBILITY.to_string(),
        }
    }
}

impl EntityForm for SourceForm {
    type Record = Source;

    fn prefill(record: &Source) -> Self {
        Self {
            name: record.name.clone(),
            url: record.url.clone(),
            category: record.category,
            is_active: record.is_active,
            credibility_score: record.credibility_score.to_string(),
        }
    }

    fn into_record(
        self,
        _existing: Option<&Source>,
        id: RecordId,
        now: DateTime<Utc>,
    ) -> Result<Source, ValidationError> {
        required("name", &self.name)?;
        required("url", &self.url)?;
        absolute_url(&self.url)?;
        let credibility_score =
            float_in_range("credibilityScore", &self.credibility_score, &CREDIBILITY_RANGE)?;

        // The URL is kept exactly as typed; parsing only validates it.
        Ok(Source {
            id,
            name: self.name,
            url: self.url,
            category: self.category,
            is_active: self.is_active,
            credibility_score,
            last_updated: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn form(url: &str, score: &str) -> SourceForm {
        SourceForm {
            name: "Test".into(),
            url: url.into(),
            credibility_score: score.into(),
            ..SourceForm::default()
        }
    }

    #[test]
    fn blank_form_defaults() {
        let blank = SourceForm::default();
        assert!(blank.is_active);
        assert_eq!(blank.credibility_score, "7.5");
        assert_eq!(blank.category, SourceCategory::General);
    }

    #[test]
    fn url_kept_verbatim() {
        let source = form("https://Test.com", "8")
            .into_record(None, 1, Utc::now())
            .unwrap();
        assert_eq!(source.url, "https://Test.com");
    }

    #[rstest]
    #[case("", "7.5", "url")]
    #[case("test.com", "7.5", "url")]
    #[case("https://test.com", "10.5", "credibilityScore")]
    #[case("https://test.com", "high", "credibilityScore")]
    fn rejected_fields(#[case] url: &str, #[case] score: &str, #[case] field: &str) {
        let err = form(url, score).into_record(None, 1, Utc::now()).unwrap_err();
        assert_eq!(err.field(), field);
    }

    #[test]
    fn prefill_round_trips_score_text() {
        let source = form("https://test.com", "9.0")
            .into_record(None, 1, Utc::now())
            .unwrap();
        let again = SourceForm::prefill(&source)
            .into_record(Some(&source), 1, Utc::now())
            .unwrap();
        assert!((again.credibility_score - 9.0).abs() < f64::EPSILON);
    }
}
