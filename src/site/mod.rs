//! Site structure: locales, page routes and the metadata of each page.
//!
//! The website is exported statically. Which pages exist is decided here:
//! every locale gets the four section pages, and the English locale also
//! gets one detail page per project and per article in the content service.

pub mod locale;
pub mod meta;
pub mod routes;

pub use locale::Locale;
pub use meta::{article_meta, locale_copy, page_meta, project_meta, section_meta, PageMeta};
pub use routes::{
    all_routes, article_params, is_valid_slug, project_params, Route, RouteError, SlugParam,
};
