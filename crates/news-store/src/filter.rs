//! Text and category predicates applied over a collection for display.
//!
//! A [`ListQuery`] keeps every record whose category matches AND whose
//! searchable fields contain the query text, compared case-insensitively.
//! Results keep the collection's order; there is no ranking.

use std::collections::BTreeMap;
use std::fmt;

use news_core::entities::{Article, GlossaryTerm};
use news_core::responses::GlossaryGroup;

/// Sentinel category that matches every record.
pub const ALL_CATEGORIES: &str = "all";

/// Category selector offered on the article and glossary browse views.
pub const BROWSE_CATEGORIES: &[&str] = &[ALL_CATEGORIES, "politics", "sports", "movies", "tech"];

/// Which categories a query admits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Lowercased category name.
    Only(String),
}

impl CategoryFilter {
    /// `"all"` (any case) or an empty selector admits everything.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() || lowered == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(lowered)
        }
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category.to_lowercase() == *wanted,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record the list controller can filter.
pub trait Searchable {
    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> &str;
}

impl Searchable for Article {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.content, &self.author]
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for GlossaryTerm {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.term, &self.definition]
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// Free-text query plus category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    text: String,
    needle: String,
    category: CategoryFilter,
}

impl ListQuery {
    #[must_use]
    pub fn new(text: impl Into<String>, category: CategoryFilter) -> Self {
        let text = text.into();
        let needle = text.to_lowercase();
        Self {
            text,
            needle,
            category,
        }
    }

    /// Query that admits every record.
    #[must_use]
    pub fn everything() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }

    #[must_use]
    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        self.category.matches(record.category()) && self.matches_text(record)
    }

    fn matches_text<T: Searchable>(&self, record: &T) -> bool {
        self.needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Matching records, in collection order.
    pub fn apply<'a, T, I>(&self, records: I) -> Vec<&'a T>
    where
        T: Searchable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(*record))
            .collect()
    }
}

/// Group terms under the uppercase first letter of `term`.
///
/// Letters come out sorted; terms keep their incoming order within a letter.
#[must_use]
pub fn group_by_initial(terms: &[&GlossaryTerm]) -> Vec<GlossaryGroup> {
    let mut groups: BTreeMap<String, Vec<GlossaryTerm>> = BTreeMap::new();
    for term in terms {
        let letter = term
            .term
            .chars()
            .next()
            .map_or_else(|| String::from("#"), |c| c.to_uppercase().collect());
        groups.entry(letter).or_default().push((*term).clone());
    }
    groups
        .into_iter()
        .map(|(letter, terms)| GlossaryGroup { letter, terms })
        .collect()
}
