//! Cross-reference checks over a content store.
//!
//! Findings are reported, never enforced: a related id that does not
//! resolve is dropped when related items are resolved, and an unknown
//! category simply matches nothing.

use std::collections::HashSet;

use serde::Serialize;

use super::ContentStore;
use crate::site::is_valid_slug;

/// One consistency problem in a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    DanglingRelatedArticle { article: String, missing: String },
    DanglingRelatedProject { project: String, missing: String },
    DuplicateArticleSlug { slug: String },
    DuplicateProjectSlug { slug: String },
    InvalidArticleSlug { slug: String },
    InvalidProjectSlug { slug: String },
    UnknownAuthor { article: String, author: String },
    UnknownCategory { item: String, category: String },
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finding::DanglingRelatedArticle { article, missing } => {
                write!(f, "article '{}' relates to missing article '{}'", article, missing)
            }
            Finding::DanglingRelatedProject { project, missing } => {
                write!(f, "project '{}' relates to missing project '{}'", project, missing)
            }
            Finding::DuplicateArticleSlug { slug } => write!(f, "duplicate article slug '{}'", slug),
            Finding::DuplicateProjectSlug { slug } => write!(f, "duplicate project slug '{}'", slug),
            Finding::InvalidArticleSlug { slug } => {
                write!(f, "article slug '{}' cannot be routed", slug)
            }
            Finding::InvalidProjectSlug { slug } => {
                write!(f, "project slug '{}' cannot be routed", slug)
            }
            Finding::UnknownAuthor { article, author } => {
                write!(f, "article '{}' has unknown author '{}'", article, author)
            }
            Finding::UnknownCategory { item, category } => {
                write!(f, "'{}' has unknown category '{}'", item, category)
            }
        }
    }
}

/// Result of [`ContentStore::integrity_report`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub findings: Vec<Finding>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Slugs seen more than once, each reported once, in order of their second occurrence
fn duplicates<'a>(slugs: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    slugs
        .filter(|slug| !seen.insert(*slug) && reported.insert(*slug))
        .map(str::to_string)
        .collect()
}

pub(super) fn check(store: &ContentStore) -> IntegrityReport {
    let article_slugs: HashSet<&str> = store.articles().iter().map(|a| a.slug()).collect();
    let project_slugs: HashSet<&str> = store.projects().iter().map(|p| p.slug.as_str()).collect();
    let author_ids: HashSet<&str> = store.authors().iter().map(|a| a.id.as_str()).collect();
    let category_ids: HashSet<&str> = store.categories().iter().map(|c| c.id.as_str()).collect();

    let mut findings = Vec::new();

    findings.extend(
        duplicates(store.articles().iter().map(|a| a.slug()))
            .into_iter()
            .map(|slug| Finding::DuplicateArticleSlug { slug }),
    );
    findings.extend(
        duplicates(store.projects().iter().map(|p| p.slug.as_str()))
            .into_iter()
            .map(|slug| Finding::DuplicateProjectSlug { slug }),
    );

    findings.extend(
        store
            .articles()
            .iter()
            .filter(|a| !is_valid_slug(a.slug()))
            .map(|a| Finding::InvalidArticleSlug {
                slug: a.slug().to_string(),
            }),
    );
    findings.extend(
        store
            .projects()
            .iter()
            .filter(|p| !is_valid_slug(&p.slug))
            .map(|p| Finding::InvalidProjectSlug {
                slug: p.slug.clone(),
            }),
    );

    for article in store.articles() {
        let meta = &article.meta;

        if !author_ids.contains(meta.author.as_str()) {
            findings.push(Finding::UnknownAuthor {
                article: meta.slug.clone(),
                author: meta.author.clone(),
            });
        }
        if !category_ids.contains(meta.category.as_str()) {
            findings.push(Finding::UnknownCategory {
                item: meta.slug.clone(),
                category: meta.category.clone(),
            });
        }
        for related in &article.related_articles {
            if !article_slugs.contains(related.as_str()) {
                findings.push(Finding::DanglingRelatedArticle {
                    article: meta.slug.clone(),
                    missing: related.clone(),
                });
            }
        }
    }

    for project in store.projects() {
        if !category_ids.contains(project.category.as_str()) {
            findings.push(Finding::UnknownCategory {
                item: project.slug.clone(),
                category: project.category.clone(),
            });
        }
        for related in &project.related_projects {
            if !project_slugs.contains(related.as_str()) {
                findings.push(Finding::DanglingRelatedProject {
                    project: project.slug.clone(),
                    missing: related.clone(),
                });
            }
        }
    }

    IntegrityReport { findings }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates() {
        let slugs = ["a", "b", "a", "c", "b", "a"];
        assert_eq!(duplicates(slugs.into_iter()), vec!["a", "b"]);
    }

    #[test]
    fn test_reports_unroutable_slugs() {
        let json = r#"{
            "categories": [{"id": "x", "name": "X", "slug": "x"}],
            "projects": [
                {"id": "1", "slug": "Montblanc", "title": "M", "year": "2024", "category": "x",
                 "mainImage": "", "gallery": [], "description": ""},
                {"id": "2", "slug": "a/b", "title": "AB", "year": "2024", "category": "x",
                 "mainImage": "", "gallery": [], "description": ""},
                {"id": "3", "slug": "ok-slug", "title": "OK", "year": "2024", "category": "x",
                 "mainImage": "", "gallery": [], "description": ""}
            ]
        }"#;

        let report = ContentStore::from_json_str(json).unwrap().integrity_report();
        assert!(!report.is_clean());
        assert_eq!(
            report.findings,
            vec![
                Finding::InvalidProjectSlug {
                    slug: "Montblanc".into()
                },
                Finding::InvalidProjectSlug { slug: "a/b".into() },
            ]
        );
    }

    #[test]
    fn test_finding_display() {
        let finding = Finding::DanglingRelatedArticle {
            article: "a".into(),
            missing: "ghost".into(),
        };
        assert_eq!(finding.to_string(), "article 'a' relates to missing article 'ghost'");
    }

    #[test]
    fn test_reports_dangling_and_unknown_references() {
        let json = r#"{
            "authors": [{"id": "sophie-laurent", "name": "Sophie Laurent", "role": "Design Director"}],
            "categories": [{"id": "retail-design", "name": "Retail Design", "slug": "retail-design"}],
            "articles": [{
                "id": "a", "slug": "a", "title": "A", "excerpt": "", "date": "May 1, 2024",
                "readTime": "1 min read", "category": "retail-design", "author": "nobody",
                "heroImage": "", "content": [], "relatedArticles": ["ghost"]
            }],
            "projects": [{
                "id": "p", "slug": "p", "title": "P", "year": "2024", "category": "public-art",
                "mainImage": "", "gallery": [], "description": "", "relatedProjects": ["p", "gone"]
            }]
        }"#;

        let store = ContentStore::from_json_str(json).unwrap();
        let report = store.integrity_report();

        assert_eq!(
            report.findings,
            vec![
                Finding::UnknownAuthor {
                    article: "a".into(),
                    author: "nobody".into()
                },
                Finding::DanglingRelatedArticle {
                    article: "a".into(),
                    missing: "ghost".into()
                },
                Finding::UnknownCategory {
                    item: "p".into(),
                    category: "public-art".into()
                },
                Finding::DanglingRelatedProject {
                    project: "p".into(),
                    missing: "gone".into()
                },
            ]
        );
    }
}
