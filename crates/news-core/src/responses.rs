//! CLI response types returned as JSON by `nws` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Article, GlossaryTerm, User};
use crate::enums::EntityKind;
use crate::ids::RecordId;

/// Response from any `nws <entity> create|update`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SaveResponse<T> {
    pub record: T,
    /// `true` when the record was appended, `false` when it replaced one.
    pub created: bool,
}

/// Response from any `nws <entity> delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub kind: EntityKind,
    pub id: RecordId,
    pub removed: bool,
}

/// Response from `nws article feed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HomeFeedResponse {
    pub category: String,
    pub featured: Option<Article>,
    pub latest: Vec<Article>,
    pub articles: Vec<Article>,
}

/// Response from `nws article search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArticleSearchResponse {
    pub query: String,
    pub category: String,
    pub results: Vec<Article>,
    pub total_results: u32,
}

/// Glossary terms sharing an initial letter.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GlossaryGroup {
    pub letter: String,
    pub terms: Vec<GlossaryTerm>,
}

/// Response from `nws glossary search --grouped`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GlossaryIndexResponse {
    pub query: String,
    pub category: String,
    pub groups: Vec<GlossaryGroup>,
    pub total_terms: u32,
}

/// Response from `nws bookmark list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BookmarksResponse {
    pub articles: Vec<Article>,
    pub count: u32,
}

/// Response from `nws auth login|register|whoami`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionResponse {
    pub user: Option<User>,
    pub is_admin: bool,
}
