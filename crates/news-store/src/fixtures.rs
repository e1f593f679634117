//! Seed data embedded at compile time.

use news_core::entities::{Article, GlossaryTerm, Source, User};
use serde::de::DeserializeOwned;

use crate::error::StoreError;

const ARTICLES: &str = include_str!("../fixtures/articles.json");
const USERS: &str = include_str!("../fixtures/users.json");
const GLOSSARY: &str = include_str!("../fixtures/glossary.json");
const SOURCES: &str = include_str!("../fixtures/sources.json");

fn parse<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<Vec<T>, StoreError> {
    serde_json::from_str(raw).map_err(|source| StoreError::Fixture { name, source })
}

/// # Errors
///
/// Returns [`StoreError::Fixture`] if the embedded JSON does not match [`Article`].
pub fn articles() -> Result<Vec<Article>, StoreError> {
    parse("articles", ARTICLES)
}

/// # Errors
///
/// Returns [`StoreError::Fixture`] if the embedded JSON does not match [`User`].
pub fn users() -> Result<Vec<User>, StoreError> {
    parse("users", USERS)
}

/// # Errors
///
/// Returns [`StoreError::Fixture`] if the embedded JSON does not match [`GlossaryTerm`].
pub fn glossary() -> Result<Vec<GlossaryTerm>, StoreError> {
    parse("glossary", GLOSSARY)
}

/// # Errors
///
/// Returns [`StoreError::Fixture`] if the embedded JSON does not match [`Source`].
pub fn sources() -> Result<Vec<Source>, StoreError> {
    parse("sources", SOURCES)
}
