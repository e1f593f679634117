//! Service layer owning every collection for one session.
//!
//! `NewsService` holds a [`RecordStore`] per editable kind, the article
//! catalog and the reader's bookmarks. It is an ordinary value: callers
//! construct it and pass it around explicitly.

use chrono::{DateTime, Utc};
use news_core::entities::{AiModel, Article, GlossaryTerm, Record, Source, User};
use news_core::enums::EntityKind;
use news_core::ids::RecordId;
use news_core::responses::{ArticleSearchResponse, GlossaryIndexResponse, HomeFeedResponse};

use crate::bookmarks::Bookmarks;
use crate::catalog::ArticleCatalog;
use crate::deletion::PendingDeletion;
use crate::editor::{EntityForm, Saved, submit};
use crate::error::StoreError;
use crate::filter::{CategoryFilter, ListQuery, group_by_initial};
use crate::fixtures;
use crate::store::RecordStore;

/// Access to the store holding records of type `T`.
pub trait Collections<T> {
    fn records(&self) -> &RecordStore<T>;

    fn records_mut(&mut self) -> &mut RecordStore<T>;
}

#[derive(Debug, Clone, Default)]
pub struct NewsService {
    users: RecordStore<User>,
    sources: RecordStore<Source>,
    glossary: RecordStore<GlossaryTerm>,
    models: RecordStore<AiModel>,
    catalog: ArticleCatalog,
    bookmarks: Bookmarks,
}

impl NewsService {
    /// Service populated from the embedded fixtures.
    ///
    /// AI models start empty; the first three articles start bookmarked.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Fixture`] if an embedded fixture fails to parse.
    pub fn seeded() -> Result<Self, StoreError> {
        let catalog = ArticleCatalog::new(fixtures::articles()?);
        let bookmarks = Bookmarks::seeded(&catalog);
        let service = Self {
            users: RecordStore::from_records(fixtures::users()?),
            sources: RecordStore::from_records(fixtures::sources()?),
            glossary: RecordStore::from_records(fixtures::glossary()?),
            models: RecordStore::new(),
            catalog,
            bookmarks,
        };
        tracing::debug!(
            users = service.users.len(),
            sources = service.sources.len(),
            glossary = service.glossary.len(),
            articles = service.catalog.all().len(),
            "seeded service from fixtures"
        );
        Ok(service)
    }

    /// Service with no records at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn users(&self) -> &RecordStore<User> {
        &self.users
    }

    #[must_use]
    pub const fn sources(&self) -> &RecordStore<Source> {
        &self.sources
    }

    #[must_use]
    pub const fn glossary(&self) -> &RecordStore<GlossaryTerm> {
        &self.glossary
    }

    #[must_use]
    pub const fn models(&self) -> &RecordStore<AiModel> {
        &self.models
    }

    #[must_use]
    pub const fn catalog(&self) -> &ArticleCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    // -- editing -----------------------------------------------------------

    /// Validate `form` and save it, stamped with the current time.
    ///
    /// # Errors
    ///
    /// See [`submit`].
    pub fn save<F>(
        &mut self,
        form: F,
        target: Option<RecordId>,
    ) -> Result<Saved<F::Record>, StoreError>
    where
        F: EntityForm,
        Self: Collections<F::Record>,
    {
        self.save_at(form, target, Utc::now())
    }

    /// [`save`](Self::save) with an explicit clock.
    ///
    /// # Errors
    ///
    /// See [`submit`].
    pub fn save_at<F>(
        &mut self,
        form: F,
        target: Option<RecordId>,
        now: DateTime<Utc>,
    ) -> Result<Saved<F::Record>, StoreError>
    where
        F: EntityForm,
        Self: Collections<F::Record>,
    {
        let store = <Self as Collections<F::Record>>::records_mut(self);
        let saved = submit(store, form, target, now)?;
        tracing::info!(
            kind = <F::Record as Record>::KIND.as_str(),
            id = saved.record.id(),
            created = saved.created(),
            "saved record"
        );
        Ok(saved)
    }

    /// Start deleting a record. Nothing is removed until
    /// [`confirm`](Self::confirm) is called.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReadOnly`] for articles.
    pub fn request_deletion(
        &self,
        kind: EntityKind,
        id: RecordId,
    ) -> Result<PendingDeletion, StoreError> {
        if kind == EntityKind::Article {
            return Err(StoreError::ReadOnly { kind });
        }
        Ok(PendingDeletion::new(kind, id))
    }

    /// Carry out a confirmed deletion. Returns whether a record was removed.
    pub fn confirm(&mut self, pending: PendingDeletion) -> bool {
        let id = pending.id();
        let removed = match pending.kind() {
            EntityKind::User => self.users.delete(id).is_some(),
            EntityKind::Source => self.sources.delete(id).is_some(),
            EntityKind::GlossaryTerm => self.glossary.delete(id).is_some(),
            EntityKind::AiModel => self.models.delete(id).is_some(),
            EntityKind::Article => false,
        };
        tracing::info!(kind = pending.kind().as_str(), id, removed, "confirmed deletion");
        removed
    }

    // -- reading -----------------------------------------------------------

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown article id.
    pub fn article(&self, id: RecordId) -> Result<&Article, StoreError> {
        self.catalog.get(id).ok_or(StoreError::NotFound {
            kind: EntityKind::Article,
            id,
        })
    }

    #[must_use]
    pub fn home_feed(
        &self,
        category: &CategoryFilter,
        latest_count: usize,
        home_count: usize,
    ) -> HomeFeedResponse {
        self.catalog.home_feed(category, latest_count, home_count)
    }

    #[must_use]
    pub fn search_articles(&self, query: &ListQuery) -> ArticleSearchResponse {
        self.catalog.search(query)
    }

    #[must_use]
    pub fn search_glossary(&self, query: &ListQuery) -> Vec<&GlossaryTerm> {
        query.apply(self.glossary.list())
    }

    /// Matching glossary terms grouped by initial letter.
    #[must_use]
    pub fn glossary_index(&self, query: &ListQuery) -> GlossaryIndexResponse {
        let terms = self.search_glossary(query);
        GlossaryIndexResponse {
            query: query.text().to_string(),
            category: query.category().to_string(),
            total_terms: u32::try_from(terms.len()).unwrap_or(u32::MAX),
            groups: group_by_initial(&terms),
        }
    }

    // -- bookmarks ---------------------------------------------------------

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown article id.
    pub fn bookmark(&mut self, id: RecordId) -> Result<bool, StoreError> {
        self.bookmarks.add(&self.catalog, id)
    }

    pub fn unbookmark(&mut self, id: RecordId) -> bool {
        self.bookmarks.remove(id)
    }

    #[must_use]
    pub fn bookmarked_articles(&self) -> Vec<&Article> {
        self.bookmarks.articles(&self.catalog)
    }
}

macro_rules! impl_collections {
    ($ty:ty, $field:ident) => {
        impl Collections<$ty> for NewsService {
            fn records(&self) -> &RecordStore<$ty> {
                &self.$field
            }

            fn records_mut(&mut self) -> &mut RecordStore<$ty> {
                &mut self.$field
            }
        }
    };
}

impl_collections!(User, users);
impl_collections!(Source, sources);
impl_collections!(GlossaryTerm, glossary);
impl_collections!(AiModel, models);
