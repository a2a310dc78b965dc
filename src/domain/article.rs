//! Articles ("insights") and their rich-content blocks.
//!
//! An article is split in two shapes: [`ArticleMetadata`] for list views and
//! [`Article`], which adds the ordered block sequence and related ids.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display format of `ArticleMetadata::date` ("May 12, 2024")
const DATE_FORMAT: &str = "%B %d, %Y";

/// One unit of an article body. Order within an article is significant.
///
/// Tagged by `type` on the wire. Variant payloads are checked on
/// deserialization: an image without `src` or a list without `items` is
/// rejected, as is an unknown `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ArticleBlock {
    Text {
        content: String,
    },

    Heading {
        content: String,
    },

    Subheading {
        content: String,
    },

    Image {
        #[serde(default)]
        content: String,
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },

    Quote {
        content: String,
        /// Attribution line
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },

    List {
        #[serde(default)]
        content: String,
        items: Vec<String>,
    },

    Video {
        #[serde(default)]
        content: String,
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },
}

/// Discriminant of an [`ArticleBlock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    Heading,
    Subheading,
    Image,
    Quote,
    List,
    Video,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BlockKind::Text => "text",
            BlockKind::Heading => "heading",
            BlockKind::Subheading => "subheading",
            BlockKind::Image => "image",
            BlockKind::Quote => "quote",
            BlockKind::List => "list",
            BlockKind::Video => "video",
        };
        f.write_str(name)
    }
}

impl ArticleBlock {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn heading(content: impl Into<String>) -> Self {
        Self::Heading {
            content: content.into(),
        }
    }

    pub fn subheading(content: impl Into<String>) -> Self {
        Self::Subheading {
            content: content.into(),
        }
    }

    /// Image block with alt text and caption, no explicit dimensions
    pub fn image(src: impl Into<String>, alt: impl Into<String>, caption: impl Into<String>) -> Self {
        Self::Image {
            content: String::new(),
            src: src.into(),
            alt: Some(alt.into()),
            caption: Some(caption.into()),
            width: None,
            height: None,
        }
    }

    pub fn quote(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self::Quote {
            content: content.into(),
            author: Some(author.into()),
        }
    }

    pub fn list(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::List {
            content: String::new(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self::Video {
            content: String::new(),
            src: src.into(),
            caption: None,
            width: None,
            height: None,
        }
    }

    /// The block's text content (empty for most media blocks)
    pub fn content(&self) -> &str {
        match self {
            ArticleBlock::Text { content }
            | ArticleBlock::Heading { content }
            | ArticleBlock::Subheading { content }
            | ArticleBlock::Image { content, .. }
            | ArticleBlock::Quote { content, .. }
            | ArticleBlock::List { content, .. }
            | ArticleBlock::Video { content, .. } => content,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            ArticleBlock::Text { .. } => BlockKind::Text,
            ArticleBlock::Heading { .. } => BlockKind::Heading,
            ArticleBlock::Subheading { .. } => BlockKind::Subheading,
            ArticleBlock::Image { .. } => BlockKind::Image,
            ArticleBlock::Quote { .. } => BlockKind::Quote,
            ArticleBlock::List { .. } => BlockKind::List,
            ArticleBlock::Video { .. } => BlockKind::Video,
        }
    }
}

/// Summary of an article for list views (no body, no related ids)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetadata {
    pub id: String,

    /// External identity key, equal to `id` in the seed data
    pub slug: String,

    pub title: String,
    pub excerpt: String,

    /// Human-readable publication date, e.g. "May 12, 2024"
    pub date: String,

    /// e.g. "8 min read"
    pub read_time: String,

    /// Category id (matched verbatim by category filters)
    pub category: String,

    /// Author id
    pub author: String,

    pub hero_image: String,

    #[serde(default)]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ArticleMetadata {
    /// Parse `date` into a calendar date, if it is in the display format
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// A full article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(flatten)]
    pub meta: ArticleMetadata,

    /// Body, rendered in order
    pub content: Vec<ArticleBlock>,

    /// Slugs of other articles; may name articles that do not exist
    #[serde(default)]
    pub related_articles: Vec<String>,
}

impl Article {
    /// Project to the list-view shape
    pub fn metadata(&self) -> ArticleMetadata {
        self.meta.clone()
    }

    pub fn slug(&self) -> &str {
        &self.meta.slug
    }
}
