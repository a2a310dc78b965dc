//! Head metadata (title, description, OpenGraph) for every page.
//!
//! Section pages carry the copy of their locale. Detail pages are built from
//! the record they show.

use chrono::NaiveDate;
use serde::Serialize;

use super::locale::Locale;
use super::routes::Route;
use crate::config::SiteSettings;
use crate::service::ContentApi;

/// Metadata of one rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// OpenGraph type ("article" or "website")
    pub og_type: &'static str,
    pub og_locale: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_on: Option<NaiveDate>,
    /// Display names of the article's authors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
}

impl PageMeta {
    fn not_found(kind: &str, site: &SiteSettings) -> Self {
        Self {
            title: format!("{} Not Found | {}", kind, site.name),
            description: format!(
                "The requested {} could not be found.",
                kind.to_lowercase()
            ),
            og_type: "website",
            og_locale: Locale::En.og_locale(),
            url: None,
            image: None,
            published_on: None,
            authors: Vec::new(),
        }
    }
}

/// Title and description shared by a locale's section pages
pub fn locale_copy(locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::En => (
            "ArtPill - Global Design Studio",
            "Creativity, strategy and design to imagine impactful stories for architecture, events and objects.",
        ),
        Locale::Fr => (
            "ArtPill - Studio de Design Global",
            "Cr\u{e9}ativit\u{e9}, strat\u{e9}gie et design pour imaginer des histoires percutantes pour l'architecture, les \u{e9}v\u{e9}nements et les objets.",
        ),
    }
}

/// Metadata for a page that does not depend on content.
///
/// The root page speaks the configured default locale. Detail routes return
/// `None`; use [`page_meta`] for those.
pub fn section_meta(route: &Route, site: &SiteSettings) -> Option<PageMeta> {
    let locale = match route {
        Route::Root => site.default_locale,
        Route::Home(locale)
        | Route::Archives(locale)
        | Route::Insights(locale)
        | Route::Contact(locale) => *locale,
        Route::Project { .. } | Route::Article { .. } => return None,
    };

    let (title, description) = locale_copy(locale);
    Some(PageMeta {
        title: title.to_string(),
        description: description.to_string(),
        og_type: "website",
        og_locale: locale.og_locale(),
        url: Some(route.url(&site.base_url)),
        image: None,
        published_on: None,
        authors: Vec::new(),
    })
}

/// Metadata for any page of the site
pub async fn page_meta<A: ContentApi + ?Sized>(
    api: &A,
    route: &Route,
    site: &SiteSettings,
) -> PageMeta {
    match route {
        Route::Article { slug, .. } => article_meta(api, slug, site).await,
        Route::Project { slug, .. } => project_meta(api, slug, site).await,
        _ => match section_meta(route, site) {
            Some(meta) => meta,
            None => PageMeta::not_found("Page", site),
        },
    }
}

/// Metadata for `/en/insights/<slug>`
pub async fn article_meta<A: ContentApi + ?Sized>(
    api: &A,
    slug: &str,
    site: &SiteSettings,
) -> PageMeta {
    let article = match api.get_article_by_slug(slug).await {
        Some(article) => article,
        None => return PageMeta::not_found("Article", site),
    };

    let route = Route::Article {
        locale: Locale::En,
        slug: article.meta.slug.clone(),
    };

    // Unknown author ids are shown as-is
    let author = match api.get_author_by_id(&article.meta.author).await {
        Some(author) => author.name,
        None => article.meta.author.clone(),
    };

    PageMeta {
        title: format!("{} | {}", article.meta.title, site.name),
        description: article.meta.excerpt.clone(),
        og_type: "article",
        og_locale: Locale::En.og_locale(),
        url: Some(route.url(&site.base_url)),
        published_on: article.meta.published_on(),
        image: Some(article.meta.hero_image),
        authors: vec![author],
    }
}

/// Metadata for `/en/archives/<slug>`
pub async fn project_meta<A: ContentApi + ?Sized>(
    api: &A,
    slug: &str,
    site: &SiteSettings,
) -> PageMeta {
    let project = match api.get_project_by_slug(slug).await {
        Some(project) => project,
        None => return PageMeta::not_found("Project", site),
    };

    let route = Route::Project {
        locale: Locale::En,
        slug: project.slug.clone(),
    };

    PageMeta {
        title: format!("{} | {}", project.title, site.name),
        description: project.description,
        og_type: "article",
        og_locale: Locale::En.og_locale(),
        url: Some(route.url(&site.base_url)),
        image: Some(project.main_image),
        published_on: None,
        authors: Vec::new(),
    }
}
