//! artpill - content layer of the ArtPill Studio website
//!
//! A read-only data layer standing in for the studio's future headless CMS,
//! plus the routing logic that decides which pages the static site exports.
//!
//! # Architecture
//!
//! - The dataset (authors, categories, articles, projects) is built once
//!   and never mutated
//! - Every read goes through the asynchronous [`ContentApi`] façade, so a
//!   real CMS client can replace [`ContentService`] without touching callers
//! - A missed lookup is `None` or an empty list, never an error
//!
//! # Modules
//!
//! - `domain`: Data structures (Article, ArticleBlock, Project, Author, Category)
//! - `store`: Immutable dataset, JSON loading, integrity checks
//! - `service`: The ContentApi trait and its in-memory implementation
//! - `site`: Locales, routes, static params, page metadata
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # List featured projects
//! artpill projects --featured
//!
//! # Show an article
//! artpill article designing-retail-experiences
//!
//! # Every page of the static export, as JSON
//! artpill routes --json
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod service;
pub mod site;
pub mod store;

// Re-export main types at crate root for convenience
pub use domain::{Article, ArticleBlock, ArticleMetadata, Author, Category, GalleryImage, Project};
pub use service::{ContentApi, ContentService};
pub use site::{Locale, Route};
pub use store::{ContentStore, IntegrityReport, StoreError};
