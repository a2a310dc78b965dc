//! Domain types for the content layer.
//!
//! This module contains the entities a CMS would return:
//! - Author / Category: referenced by id from articles and projects
//! - Article: metadata projection plus an ordered block sequence
//! - Project: portfolio entries with their gallery
//!
//! All types serialize in the camelCase shape of the CMS API.

pub mod article;
pub mod author;
pub mod category;
pub mod project;

// Re-export commonly used types
pub use article::{Article, ArticleBlock, ArticleMetadata, BlockKind};
pub use author::Author;
pub use category::Category;
pub use project::{GalleryImage, Project};
