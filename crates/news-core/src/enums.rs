//! Roles, categories, providers, and entity kinds for Newsroom.
//!
//! Serialized forms match the fixture JSON (`"admin"`, `"Politics"`,
//! `"Hugging Face"`, `"fact-checking"`). Every enum parses case-insensitively
//! from its display form, ignoring spaces, dashes and underscores, so CLI
//! input like `hugging-face` or `TECHNOLOGY` is accepted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownVariant;

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_variant<T: Copy>(
    kind: &'static str,
    raw: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
) -> Result<T, UnknownVariant> {
    let wanted = normalize(raw);
    all.iter()
        .copied()
        .find(|variant| normalize(as_str(*variant)) == wanted)
        .ok_or_else(|| UnknownVariant {
            kind,
            value: raw.to_string(),
            expected: all
                .iter()
                .map(|variant| as_str(*variant))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Access level of a user account.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub const ALL: &'static [Self] = &[Self::User, Self::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("role", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// SourceCategory
// ---------------------------------------------------------------------------

/// Closed set of categories a news source can be filed under.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum SourceCategory {
    #[default]
    General,
    Politics,
    Sports,
    Technology,
    Business,
    Entertainment,
    Science,
    Health,
}

impl SourceCategory {
    pub const ALL: &'static [Self] = &[
        Self::General,
        Self::Politics,
        Self::Sports,
        Self::Technology,
        Self::Business,
        Self::Entertainment,
        Self::Science,
        Self::Health,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Politics => "Politics",
            Self::Sports => "Sports",
            Self::Technology => "Technology",
            Self::Business => "Business",
            Self::Entertainment => "Entertainment",
            Self::Science => "Science",
            Self::Health => "Health",
        }
    }
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("source category", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// ModelProvider
// ---------------------------------------------------------------------------

/// Vendor behind an AI model configuration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ModelProvider {
    #[default]
    #[serde(rename = "OpenAI")]
    OpenAi,
    Anthropic,
    Google,
    Mistral,
    Cohere,
    #[serde(rename = "Hugging Face")]
    HuggingFace,
}

impl ModelProvider {
    pub const ALL: &'static [Self] = &[
        Self::OpenAi,
        Self::Anthropic,
        Self::Google,
        Self::Mistral,
        Self::Cohere,
        Self::HuggingFace,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::Google => "Google",
            Self::Mistral => "Mistral",
            Self::Cohere => "Cohere",
            Self::HuggingFace => "Hugging Face",
        }
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelProvider {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("provider", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// ModelFeature
// ---------------------------------------------------------------------------

/// Capability an AI model configuration advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ModelFeature {
    TextAnalysis,
    Sentiment,
    Summarization,
    FactChecking,
    Classification,
    Translation,
    CodeGeneration,
    CreativeWriting,
}

impl ModelFeature {
    pub const ALL: &'static [Self] = &[
        Self::TextAnalysis,
        Self::Sentiment,
        Self::Summarization,
        Self::FactChecking,
        Self::Classification,
        Self::Translation,
        Self::CodeGeneration,
        Self::CreativeWriting,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextAnalysis => "text-analysis",
            Self::Sentiment => "sentiment",
            Self::Summarization => "summarization",
            Self::FactChecking => "fact-checking",
            Self::Classification => "classification",
            Self::Translation => "translation",
            Self::CodeGeneration => "code-generation",
            Self::CreativeWriting => "creative-writing",
        }
    }
}

impl fmt::Display for ModelFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelFeature {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("feature", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Discriminator for every record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Source,
    GlossaryTerm,
    AiModel,
    Article,
}

impl EntityKind {
    pub const ALL: &'static [Self] = &[
        Self::User,
        Self::Source,
        Self::GlossaryTerm,
        Self::AiModel,
        Self::Article,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Source => "source",
            Self::GlossaryTerm => "glossary_term",
            Self::AiModel => "ai_model",
            Self::Article => "article",
        }
    }

    /// Human label used in confirmation prompts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Source => "source",
            Self::GlossaryTerm => "glossary term",
            Self::AiModel => "AI model",
            Self::Article => "article",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("entity kind", s, Self::ALL, Self::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn provider_serializes_display_names() {
        assert_eq!(
            serde_json::to_string(&ModelProvider::HuggingFace).unwrap(),
            "\"Hugging Face\""
        );
        assert_eq!(
            serde_json::to_string(&ModelProvider::OpenAi).unwrap(),
            "\"OpenAI\""
        );
    }

    #[test]
    fn feature_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ModelFeature::FactChecking).unwrap(),
            "\"fact-checking\""
        );
    }

    #[test]
    fn parsing_ignores_case_and_separators() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(
            "technology".parse::<SourceCategory>().unwrap(),
            SourceCategory::Technology
        );
        assert_eq!(
            "hugging-face".parse::<ModelProvider>().unwrap(),
            ModelProvider::HuggingFace
        );
        assert_eq!(
            "code_generation".parse::<ModelFeature>().unwrap(),
            ModelFeature::CodeGeneration
        );
        assert_eq!(
            "glossary-term".parse::<EntityKind>().unwrap(),
            EntityKind::GlossaryTerm
        );
    }

    #[test]
    fn unknown_variant_lists_expected_values() {
        let err = "editor".parse::<Role>().expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "unknown role 'editor' (expected one of: user, admin)"
        );
    }

    #[test]
    fn display_matches_as_str() {
        for category in SourceCategory::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
        for feature in ModelFeature::ALL {
            assert_eq!(feature.to_string(), feature.as_str());
        }
    }
}
