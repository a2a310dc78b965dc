//! Page routes and static-param generation.
//!
//! ```text
//! /                          Root (language picker)
//! /<locale>                  Home
//! /<locale>/archives         Project index
//! /en/archives/<slug>        Project detail
//! /<locale>/insights         Article index
//! /en/insights/<slug>        Article detail
//! /<locale>/contact          Contact
//! ```

use serde::Serialize;
use thiserror::Error;

use super::locale::Locale;
use crate::service::ContentApi;

const ARCHIVES: &str = "archives";
const INSIGHTS: &str = "insights";
const CONTACT: &str = "contact";

/// Reasons a path does not name a page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Path must start with '/': {0}")]
    NotAbsolute(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Locale '{0}' has no detail pages")]
    NoDetailPages(Locale),

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("No page at {0}")]
    NotFound(String),
}

/// A page of the site
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Home(Locale),
    Archives(Locale),
    Project { locale: Locale, slug: String },
    Insights(Locale),
    Article { locale: Locale, slug: String },
    Contact(Locale),
}

/// Slugs are lowercase ASCII letters, digits and hyphens
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl Route {
    pub fn locale(&self) -> Option<Locale> {
        match self {
            Route::Root => None,
            Route::Home(locale)
            | Route::Archives(locale)
            | Route::Insights(locale)
            | Route::Contact(locale)
            | Route::Project { locale, .. }
            | Route::Article { locale, .. } => Some(*locale),
        }
    }

    /// Absolute path of the page, without trailing slash
    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Home(locale) => format!("/{}", locale),
            Route::Archives(locale) => format!("/{}/{}", locale, ARCHIVES),
            Route::Project { locale, slug } => format!("/{}/{}/{}", locale, ARCHIVES, slug),
            Route::Insights(locale) => format!("/{}/{}", locale, INSIGHTS),
            Route::Article { locale, slug } => format!("/{}/{}/{}", locale, INSIGHTS, slug),
            Route::Contact(locale) => format!("/{}/{}", locale, CONTACT),
        }
    }

    /// Canonical URL under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Route::Root => format!("{}/", base),
            _ => format!("{}{}", base, self.path()),
        }
    }

    /// Map a URL path to the page it names. A trailing slash is accepted.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        if !path.starts_with('/') {
            return Err(RouteError::NotAbsolute(path.to_string()));
        }

        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Root);
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        let locale: Locale = segments[0].parse()?;

        match &segments[1..] {
            [] => Ok(Route::Home(locale)),
            [ARCHIVES] => Ok(Route::Archives(locale)),
            [INSIGHTS] => Ok(Route::Insights(locale)),
            [CONTACT] => Ok(Route::Contact(locale)),
            [section @ (ARCHIVES | INSIGHTS), slug] => {
                if !locale.has_detail_pages() {
                    return Err(RouteError::NoDetailPages(locale));
                }
                if !is_valid_slug(slug) {
                    return Err(RouteError::InvalidSlug(slug.to_string()));
                }

                let slug = slug.to_string();
                Ok(if *section == ARCHIVES {
                    Route::Project { locale, slug }
                } else {
                    Route::Article { locale, slug }
                })
            }
            [section, ..] if ![ARCHIVES, INSIGHTS, CONTACT].contains(section) => {
                Err(RouteError::UnknownSection(section.to_string()))
            }
            _ => Err(RouteError::NotFound(path.to_string())),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Parameter set for one generated detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugParam {
    pub slug: String,
}

/// Params for slugs that pass [`is_valid_slug`]; others are skipped with a warning
fn routable(kind: &str, slugs: impl Iterator<Item = String>) -> Vec<SlugParam> {
    slugs
        .filter(|slug| {
            let valid = is_valid_slug(slug);
            if !valid {
                tracing::warn!(kind, slug = %slug, "Skipping page with unroutable slug");
            }
            valid
        })
        .map(|slug| SlugParam { slug })
        .collect()
}

/// One param per routable article in the content service, in store order
pub async fn article_params<A: ContentApi + ?Sized>(api: &A) -> Vec<SlugParam> {
    let articles = api.get_all_articles().await;
    routable("article", articles.into_iter().map(|article| article.slug))
}

/// One param per routable project in the content service, in store order
pub async fn project_params<A: ContentApi + ?Sized>(api: &A) -> Vec<SlugParam> {
    let projects = api.get_all_projects().await;
    routable("project", projects.into_iter().map(|project| project.slug))
}

/// Every page the static export produces
pub async fn all_routes<A: ContentApi + ?Sized>(api: &A) -> Vec<Route> {
    let projects = project_params(api).await;
    let articles = article_params(api).await;

    let mut routes = vec![Route::Root];
    for locale in Locale::ALL {
        routes.push(Route::Home(locale));
        routes.push(Route::Archives(locale));
        if locale.has_detail_pages() {
            routes.extend(projects.iter().map(|p| Route::Project {
                locale,
                slug: p.slug.clone(),
            }));
        }
        routes.push(Route::Insights(locale));
        if locale.has_detail_pages() {
            routes.extend(articles.iter().map(|a| Route::Article {
                locale,
                slug: a.slug.clone(),
            }));
        }
        routes.push(Route::Contact(locale));
    }

    tracing::debug!(count = routes.len(), "Generated site routes");
    routes
}
