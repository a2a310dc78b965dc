//! In-memory content store.
//!
//! The store holds the four collections (authors, categories, articles,
//! projects) for the lifetime of the process. It has no mutation API: a
//! store is built once, from the built-in seed or from a dataset document,
//! and then only read.
//!
//! # Dataset document
//!
//! ```json
//! {
//!   "authors":    [ { "id": "...", "name": "...", "role": "..." } ],
//!   "categories": [ { "id": "...", "name": "...", "slug": "..." } ],
//!   "articles":   [ { "id": "...", "slug": "...", "content": [ { "type": "text", ... } ] } ],
//!   "projects":   [ { "id": "...", "slug": "...", "gallery": [] } ]
//! }
//! ```

pub mod integrity;
mod seed;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

use crate::domain::{Article, Author, Category, Project};

pub use integrity::{Finding, IntegrityReport};

/// Errors raised while loading a dataset document
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable collections of content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentStore {
    #[serde(default)]
    authors: Vec<Author>,

    #[serde(default)]
    categories: Vec<Category>,

    #[serde(default)]
    articles: Vec<Article>,

    #[serde(default)]
    projects: Vec<Project>,
}

impl ContentStore {
    /// Build a store from explicit collections
    pub fn new(
        authors: Vec<Author>,
        categories: Vec<Category>,
        articles: Vec<Article>,
        projects: Vec<Project>,
    ) -> Self {
        Self {
            authors,
            categories,
            articles,
            projects,
        }
    }

    /// The built-in studio dataset
    pub fn seed() -> Self {
        Self::new(
            seed::authors(),
            seed::categories(),
            seed::articles(),
            seed::projects(),
        )
    }

    /// Parse a dataset document
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dataset document from disk
    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        let json = fs::read_to_string(path).await.map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            articles = store.articles.len(),
            projects = store.projects.len(),
            "Loaded content dataset"
        );

        let report = store.integrity_report();
        if !report.is_clean() {
            tracing::warn!(
                path = %path.display(),
                findings = report.findings.len(),
                "Dataset has integrity problems (see `artpill check`)"
            );
        }
        Ok(store)
    }

    /// Serialize the whole dataset
    pub fn to_json_pretty(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Check cross references and slug uniqueness
    pub fn integrity_report(&self) -> IntegrityReport {
        integrity::check(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_seed_sizes() {
        let store = ContentStore::seed();

        assert_eq!(store.authors().len(), 4);
        assert_eq!(store.categories().len(), 8);
        assert_eq!(store.articles().len(), 5);
        assert_eq!(store.projects().len(), 10);
    }

    #[test]
    fn test_seed_ids_match_slugs() {
        let store = ContentStore::seed();

        for article in store.articles() {
            assert_eq!(article.meta.id, article.meta.slug);
        }
        for project in store.projects() {
            assert_eq!(project.id, project.slug);
        }
        for category in store.categories() {
            assert_eq!(category.id, category.slug);
        }
    }

    #[test]
    fn test_seed_is_consistent() {
        let report = ContentStore::seed().integrity_report();
        assert!(report.is_clean(), "unexpected findings: {:?}", report.findings);
    }

    #[test]
    fn test_json_export_reloads() {
        let store = ContentStore::seed();
        let json = store.to_json_pretty().unwrap();

        assert!(json.contains("\"relatedArticles\""));
        assert!(json.contains("\"heroImage\""));

        let reloaded = ContentStore::from_json_str(&json).unwrap();
        assert_eq!(reloaded, store);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let store = ContentStore::from_json_str(r#"{"authors": []}"#).unwrap();
        assert!(store.articles().is_empty());
        assert!(store.projects().is_empty());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_load_warns_once_per_dataset() {
        let json = r#"{
            "projects": [
                {"id": "a", "slug": "twin", "title": "A", "year": "2024", "category": "x",
                 "mainImage": "", "gallery": [], "description": "", "relatedProjects": ["gone"]},
                {"id": "b", "slug": "twin", "title": "B", "year": "2024", "category": "x",
                 "mainImage": "", "gallery": [], "description": ""}
            ]
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let store = tracing::subscriber::with_default(subscriber, || {
            // Parsing alone stays quiet
            ContentStore::from_json_str(json).unwrap();
            tokio_test::block_on(ContentStore::load(file.path())).unwrap()
        });

        assert!(store.integrity_report().findings.len() > 1);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("WARN").count(), 1, "{}", output);
        assert!(output.contains("integrity problems"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = tokio_test::block_on(ContentStore::load(Path::new(
            "/nonexistent/artpill/content.json",
        )));

        match result {
            Err(StoreError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/artpill/content.json"));
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
