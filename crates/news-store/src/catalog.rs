//! Read-only article catalog.

use news_core::entities::Article;
use news_core::ids::RecordId;
use news_core::responses::{ArticleSearchResponse, HomeFeedResponse};

use crate::filter::{CategoryFilter, ListQuery};

/// Articles in publication order as supplied by the fixtures.
#[derive(Debug, Clone, Default)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    #[must_use]
    pub const fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    #[must_use]
    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// First article flagged as featured.
    #[must_use]
    pub fn featured(&self) -> Option<&Article> {
        self.articles.iter().find(|article| article.featured)
    }

    #[must_use]
    pub fn latest(&self, count: usize) -> &[Article] {
        &self.articles[..count.min(self.articles.len())]
    }

    #[must_use]
    pub fn search(&self, query: &ListQuery) -> ArticleSearchResponse {
        let results: Vec<Article> = query.apply(&self.articles).into_iter().cloned().collect();
        ArticleSearchResponse {
            query: query.text().to_string(),
            category: query.category().to_string(),
            total_results: u32::try_from(results.len()).unwrap_or(u32::MAX),
            results,
        }
    }

    /// Featured article, the first `latest_count` articles, and the first
    /// `home_count` articles in `category`.
    #[must_use]
    pub fn home_feed(
        &self,
        category: &CategoryFilter,
        latest_count: usize,
        home_count: usize,
    ) -> HomeFeedResponse {
        let articles = self
            .articles
            .iter()
            .filter(|article| category.matches(&article.category))
            .take(home_count)
            .cloned()
            .collect();
        HomeFeedResponse {
            category: category.to_string(),
            featured: self.featured().cloned(),
            latest: self.latest(latest_count).to_vec(),
            articles,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures;

    fn catalog() -> ArticleCatalog {
        ArticleCatalog::new(fixtures::articles().unwrap())
    }

    fn ids(articles: &[Article]) -> Vec<RecordId> {
        articles.iter().map(|a| a.id).collect()
    }

    #[test]
    fn get_missing_article_is_none() {
        let catalog = catalog();
        assert!(catalog.get(2).is_some());
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn featured_is_first_flagged_article() {
        assert_eq!(catalog().featured().map(|a| a.id), Some(1));
    }

    #[test]
    fn latest_clamps_to_catalog_size() {
        let catalog = catalog();
        assert_eq!(ids(catalog.latest(3)), vec![1, 2, 3]);
        assert_eq!(catalog.latest(50).len(), catalog.all().len());
    }

    #[test]
    fn home_feed_all_takes_leading_articles() {
        let feed = catalog().home_feed(&CategoryFilter::All, 5, 6);
        assert_eq!(feed.category, "all");
        assert_eq!(feed.latest.len(), 5);
        assert_eq!(feed.articles.len(), 6);
        assert_eq!(feed.featured.map(|a| a.id), Some(1));
    }

    #[test]
    fn home_feed_filters_by_category() {
        let feed = catalog().home_feed(&CategoryFilter::parse("Politics"), 5, 6);
        assert!(!feed.articles.is_empty());
        assert!(feed.articles.iter().all(|a| a.category == "Politics"));
        assert_eq!(feed.latest.len(), 5);
    }

    #[test]
    fn search_reports_total() {
        let response = catalog().search(&ListQuery::new("cricket", CategoryFilter::All));
        assert_eq!(ids(&response.results), vec![2]);
        assert_eq!(response.total_results, 1);
        assert_eq!(response.query, "cricket");
    }
}
