//! Site Routing Integration Tests
//!
//! Tests for path parsing and the set of pages generated from content.

use std::io::Write;

use artpill::site::{all_routes, article_params, project_params, RouteError, SlugParam};
use artpill::store::Finding;
use artpill::{ContentApi, ContentService, ContentStore, Locale, Route};
use tempfile::NamedTempFile;

#[test]
fn test_parse_section_pages() {
    assert_eq!(Route::parse("/").unwrap(), Route::Root);
    assert_eq!(Route::parse("/fr").unwrap(), Route::Home(Locale::Fr));
    assert_eq!(Route::parse("/en/").unwrap(), Route::Home(Locale::En));
    assert_eq!(Route::parse("/fr/archives").unwrap(), Route::Archives(Locale::Fr));
    assert_eq!(Route::parse("/en/insights/").unwrap(), Route::Insights(Locale::En));
    assert_eq!(Route::parse("/fr/contact").unwrap(), Route::Contact(Locale::Fr));
}

#[test]
fn test_parse_detail_pages() {
    assert_eq!(
        Route::parse("/en/archives/mischief-restaurant").unwrap(),
        Route::Project {
            locale: Locale::En,
            slug: "mischief-restaurant".to_string()
        }
    );
    assert_eq!(
        Route::parse("/en/insights/designing-retail-experiences/").unwrap(),
        Route::Article {
            locale: Locale::En,
            slug: "designing-retail-experiences".to_string()
        }
    );
    assert_eq!(
        Route::parse("/fr/archives/montblanc"),
        Err(RouteError::NoDetailPages(Locale::Fr))
    );
}

#[test]
fn test_path_and_parse_agree() {
    let routes = [
        Route::Root,
        Route::Home(Locale::En),
        Route::Insights(Locale::Fr),
        Route::Project {
            locale: Locale::En,
            slug: "serie-9-table-lamp".to_string(),
        },
    ];

    for route in routes {
        assert_eq!(Route::parse(&route.path()).unwrap(), route);
    }
}

#[tokio::test]
async fn test_static_params_follow_content() {
    let service = ContentService::seeded();

    let articles = article_params(&service).await;
    assert_eq!(articles.len(), 5);
    assert_eq!(
        articles[0],
        SlugParam {
            slug: "designing-retail-experiences".to_string()
        }
    );

    let projects = project_params(&service).await;
    let slugs: Vec<_> = projects.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs.len(), 10);
    assert_eq!(slugs[0], "mischief-restaurant");
    assert!(slugs.contains(&"nyt-cooking-dinner"));

    // Every generated page resolves to content
    for param in &projects {
        assert!(service.get_project_by_slug(&param.slug).await.is_some());
    }
}

#[tokio::test]
async fn test_all_routes() {
    let service = ContentService::seeded();
    let routes = all_routes(&service).await;

    // Root + 4 section pages per locale + 10 projects + 5 articles
    assert_eq!(routes.len(), 1 + 4 * 2 + 10 + 5);
    assert_eq!(routes[0], Route::Root);

    let french: Vec<_> = routes
        .iter()
        .filter(|r| r.locale() == Some(Locale::Fr))
        .map(|r| r.path())
        .collect();
    assert_eq!(french, vec!["/fr", "/fr/archives", "/fr/insights", "/fr/contact"]);

    assert!(routes.contains(&Route::Article {
        locale: Locale::En,
        slug: "luxury-hospitality-design".to_string()
    }));

    // Every route path parses back to itself
    for route in &routes {
        assert_eq!(&Route::parse(&route.path()).unwrap(), route);
    }
}

#[tokio::test]
async fn test_routes_through_trait_object() {
    let api: &dyn ContentApi = &ContentService::seeded();
    assert_eq!(article_params(api).await.len(), 5);
}

#[tokio::test]
async fn test_loaded_dataset_routes_all_parse() {
    let json = r#"{
        "categories": [{"id": "x", "name": "X", "slug": "x"}],
        "articles": [{
            "id": "Shouting", "slug": "Shouting", "title": "S", "excerpt": "",
            "date": "May 1, 2024", "readTime": "1 min read", "category": "x",
            "author": "nobody", "heroImage": "", "content": []
        }],
        "projects": [
            {"id": "1", "slug": "Montblanc", "title": "M", "year": "2024", "category": "x",
             "mainImage": "", "gallery": [], "description": ""},
            {"id": "2", "slug": "a/b", "title": "AB", "year": "2024", "category": "x",
             "mainImage": "", "gallery": [], "description": ""},
            {"id": "3", "slug": "pavilion", "title": "P", "year": "2024", "category": "x",
             "mainImage": "", "gallery": [], "description": ""}
        ]
    }"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let store = ContentStore::load(file.path()).await.unwrap();
    let findings = store.integrity_report().findings;
    assert!(findings.contains(&Finding::InvalidArticleSlug {
        slug: "Shouting".to_string()
    }));
    assert!(findings.contains(&Finding::InvalidProjectSlug {
        slug: "Montblanc".to_string()
    }));
    assert!(findings.contains(&Finding::InvalidProjectSlug {
        slug: "a/b".to_string()
    }));

    let service = ContentService::new(store);
    let routes = all_routes(&service).await;

    // Root + 4 section pages per locale + the one routable project
    assert_eq!(routes.len(), 1 + 4 * 2 + 1);
    for route in &routes {
        assert_eq!(&Route::parse(&route.path()).unwrap(), route);
    }
    assert_eq!(
        project_params(&service).await,
        vec![SlugParam {
            slug: "pavilion".to_string()
        }]
    );
    assert!(article_params(&service).await.is_empty());
}
