//! The reader's bookmarked articles.

use news_core::entities::Article;
use news_core::enums::EntityKind;
use news_core::ids::RecordId;

use crate::catalog::ArticleCatalog;
use crate::error::StoreError;

/// How many leading catalog articles start out bookmarked.
pub const SEEDED_BOOKMARKS: usize = 3;

/// Ordered, duplicate-free list of bookmarked article ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks {
    ids: Vec<RecordId>,
}

impl Bookmarks {
    /// Bookmarks holding the first few catalog articles.
    #[must_use]
    pub fn seeded(catalog: &ArticleCatalog) -> Self {
        Self {
            ids: catalog
                .all()
                .iter()
                .take(SEEDED_BOOKMARKS)
                .map(|article| article.id)
                .collect(),
        }
    }

    #[must_use]
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    /// Bookmark an article. Returns `false` if it was already bookmarked.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the catalog has no such article.
    pub fn add(&mut self, catalog: &ArticleCatalog, id: RecordId) -> Result<bool, StoreError> {
        if !catalog.contains(id) {
            return Err(StoreError::NotFound {
                kind: EntityKind::Article,
                id,
            });
        }
        if self.contains(id) {
            return Ok(false);
        }
        self.ids.push(id);
        tracing::debug!(id, "bookmarked article");
        Ok(true)
    }

    /// Returns `false` when the article was not bookmarked.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        before != self.ids.len()
    }

    /// Bookmarked articles in bookmark order.
    #[must_use]
    pub fn articles<'a>(&self, catalog: &'a ArticleCatalog) -> Vec<&'a Article> {
        self.ids.iter().filter_map(|id| catalog.get(*id)).collect()
    }
}
