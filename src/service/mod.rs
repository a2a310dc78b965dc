//! Read façade over the content store.
//!
//! [`ContentApi`] is the calling convention of the future CMS client: every
//! read is asynchronous, and a miss is data (`None` or an empty `Vec`), never
//! an error. [`ContentService`] implements it over an in-memory
//! [`ContentStore`], optionally sleeping before each read to emulate network
//! latency.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::ResolvedConfig;
use crate::domain::{Article, ArticleMetadata, Author, Category, Project};
use crate::store::{ContentStore, StoreError};

/// Read operations exposed to page-level consumers
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Every article, projected to list-view metadata, in store order
    async fn get_all_articles(&self) -> Vec<ArticleMetadata>;

    /// Full article whose slug matches exactly
    async fn get_article_by_slug(&self, slug: &str) -> Option<Article>;

    async fn get_featured_articles(&self) -> Vec<ArticleMetadata>;

    /// Articles whose stored `category` equals `category_slug`
    async fn get_articles_by_category(&self, category_slug: &str) -> Vec<ArticleMetadata>;

    async fn get_all_projects(&self) -> Vec<Project>;

    async fn get_project_by_slug(&self, slug: &str) -> Option<Project>;

    async fn get_featured_projects(&self) -> Vec<Project>;

    /// Projects whose stored `category` equals `category_slug`
    async fn get_projects_by_category(&self, category_slug: &str) -> Vec<Project>;

    async fn get_author_by_id(&self, id: &str) -> Option<Author>;

    async fn get_all_authors(&self) -> Vec<Author>;

    async fn get_all_categories(&self) -> Vec<Category>;

    async fn get_category_by_slug(&self, slug: &str) -> Option<Category>;

    /// Resolve an article's related ids in order, skipping ids that do not
    /// name an article. Unknown `slug` yields an empty list.
    async fn get_related_articles(&self, slug: &str) -> Vec<ArticleMetadata> {
        let article = match self.get_article_by_slug(slug).await {
            Some(article) => article,
            None => return Vec::new(),
        };

        let mut related = Vec::with_capacity(article.related_articles.len());
        for id in &article.related_articles {
            if let Some(found) = self.get_article_by_slug(id).await {
                related.push(found.metadata());
            }
        }
        related
    }

    /// Resolve a project's related ids in order, skipping dangling ids
    async fn get_related_projects(&self, slug: &str) -> Vec<Project> {
        let project = match self.get_project_by_slug(slug).await {
            Some(project) => project,
            None => return Vec::new(),
        };

        let mut related = Vec::with_capacity(project.related_projects.len());
        for id in &project.related_projects {
            if let Some(found) = self.get_project_by_slug(id).await {
                related.push(found);
            }
        }
        related
    }

    /// Up to `limit` projects other than `slug`, in store order
    async fn get_other_projects(&self, slug: &str, limit: usize) -> Vec<Project> {
        self.get_all_projects()
            .await
            .into_iter()
            .filter(|project| project.slug != slug)
            .take(limit)
            .collect()
    }
}

/// In-memory implementation of [`ContentApi`]
///
/// Cheap to clone; all clones share the same immutable store.
#[derive(Debug, Clone)]
pub struct ContentService {
    store: Arc<ContentStore>,
    latency: Duration,
}

impl ContentService {
    pub fn new(store: ContentStore) -> Self {
        Self {
            store: Arc::new(store),
            latency: Duration::ZERO,
        }
    }

    /// Service over the built-in dataset
    pub fn seeded() -> Self {
        Self::new(ContentStore::seed())
    }

    /// Sleep this long before answering each read
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Build the service described by the configuration
    pub async fn from_config(config: &ResolvedConfig) -> Result<Self, StoreError> {
        let store = match &config.content_path {
            Some(path) => ContentStore::load(path).await?,
            None => ContentStore::seed(),
        };

        Ok(Self::new(store).with_latency(config.latency))
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn to_metadata<'a>(articles: impl Iterator<Item = &'a Article>) -> Vec<ArticleMetadata> {
        articles.map(Article::metadata).collect()
    }
}

#[async_trait]
impl ContentApi for ContentService {
    async fn get_all_articles(&self) -> Vec<ArticleMetadata> {
        self.simulate_latency().await;
        Self::to_metadata(self.store.articles().iter())
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_article_by_slug(&self, slug: &str) -> Option<Article> {
        self.simulate_latency().await;
        let article = self
            .store
            .articles()
            .iter()
            .find(|article| article.slug() == slug)
            .cloned();
        debug!(found = article.is_some(), "Article lookup");
        article
    }

    async fn get_featured_articles(&self) -> Vec<ArticleMetadata> {
        self.simulate_latency().await;
        Self::to_metadata(self.store.articles().iter().filter(|a| a.meta.featured))
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_articles_by_category(&self, category_slug: &str) -> Vec<ArticleMetadata> {
        self.simulate_latency().await;
        let articles = Self::to_metadata(
            self.store
                .articles()
                .iter()
                .filter(|a| a.meta.category == category_slug),
        );
        debug!(count = articles.len(), "Articles by category");
        articles
    }

    async fn get_all_projects(&self) -> Vec<Project> {
        self.simulate_latency().await;
        self.store.projects().to_vec()
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_project_by_slug(&self, slug: &str) -> Option<Project> {
        self.simulate_latency().await;
        let project = self
            .store
            .projects()
            .iter()
            .find(|project| project.slug == slug)
            .cloned();
        debug!(found = project.is_some(), "Project lookup");
        project
    }

    async fn get_featured_projects(&self) -> Vec<Project> {
        self.simulate_latency().await;
        self.store
            .projects()
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect()
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_projects_by_category(&self, category_slug: &str) -> Vec<Project> {
        self.simulate_latency().await;
        let projects: Vec<Project> = self
            .store
            .projects()
            .iter()
            .filter(|p| p.category == category_slug)
            .cloned()
            .collect();
        debug!(count = projects.len(), "Projects by category");
        projects
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_author_by_id(&self, id: &str) -> Option<Author> {
        self.simulate_latency().await;
        let author = self.store.authors().iter().find(|a| a.id == id).cloned();
        debug!(found = author.is_some(), "Author lookup");
        author
    }

    async fn get_all_authors(&self) -> Vec<Author> {
        self.simulate_latency().await;
        self.store.authors().to_vec()
    }

    async fn get_all_categories(&self) -> Vec<Category> {
        self.simulate_latency().await;
        self.store.categories().to_vec()
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_category_by_slug(&self, slug: &str) -> Option<Category> {
        self.simulate_latency().await;
        let category = self.store.categories().iter().find(|c| c.slug == slug).cloned();
        debug!(found = category.is_some(), "Category lookup");
        category
    }
}
