//! Dataset Loading Integration Tests
//!
//! Tests for reading dataset documents from disk, block validation and
//! dangling-reference handling.

use std::io::Write;
use std::time::Duration;

use artpill::config::ResolvedConfig;
use artpill::store::Finding;
use artpill::{ArticleBlock, ContentApi, ContentService, ContentStore, StoreError};
use tempfile::NamedTempFile;

const DATASET: &str = r#"{
    "authors": [
        {"id": "claire-fontaine", "name": "Claire Fontaine", "role": "Lighting Designer"}
    ],
    "categories": [
        {"id": "architecture", "name": "Architecture", "slug": "architecture"}
    ],
    "articles": [
        {
            "id": "light", "slug": "light", "title": "Light", "excerpt": "On light.",
            "date": "March 18, 2024", "readTime": "7 min read", "category": "architecture",
            "author": "claire-fontaine", "heroImage": "https://example.com/light.jpg",
            "featured": true,
            "content": [
                {"type": "heading", "content": "Why light matters"},
                {"type": "list", "items": ["Color", "Contrast"]},
                {"type": "video", "src": "https://example.com/walkthrough.mp4", "caption": "Walkthrough"},
                {"type": "text", "content": "Closing thoughts."}
            ],
            "relatedArticles": ["shadow", "ghost-article"]
        },
        {
            "id": "shadow", "slug": "shadow", "title": "Shadow", "excerpt": "On shadow.",
            "date": "March 19, 2024", "readTime": "3 min read", "category": "architecture",
            "author": "claire-fontaine", "heroImage": "https://example.com/shadow.jpg",
            "content": [{"type": "text", "content": "Shade."}]
        }
    ],
    "projects": [
        {
            "id": "pavilion", "slug": "pavilion", "title": "Pavilion", "year": "2024",
            "category": "architecture", "mainImage": "https://example.com/p.jpg",
            "gallery": [], "description": "A pavilion.", "relatedProjects": ["missing-project"]
        }
    ]
}"#;

fn write_dataset(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_load_dataset_from_disk() {
    let file = write_dataset(DATASET);
    let store = ContentStore::load(file.path()).await.unwrap();

    assert_eq!(store.articles().len(), 2);
    assert_eq!(store.projects().len(), 1);

    let blocks = &store.articles()[0].content;
    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[1], ArticleBlock::list(["Color", "Contrast"]));
    assert_eq!(blocks[2].kind().to_string(), "video");
}

#[tokio::test]
async fn test_dangling_references_are_dropped_not_fatal() {
    let file = write_dataset(DATASET);
    let service = ContentService::new(ContentStore::load(file.path()).await.unwrap());

    // The raw list keeps the dangling id
    let article = service.get_article_by_slug("light").await.unwrap();
    assert_eq!(article.related_articles, vec!["shadow", "ghost-article"]);

    // Resolution skips it
    let related: Vec<_> = service
        .get_related_articles("light")
        .await
        .into_iter()
        .map(|a| a.slug)
        .collect();
    assert_eq!(related, vec!["shadow"]);
    assert!(service.get_related_projects("pavilion").await.is_empty());

    let report = service.store().integrity_report();
    assert_eq!(
        report.findings,
        vec![
            Finding::DanglingRelatedArticle {
                article: "light".to_string(),
                missing: "ghost-article".to_string()
            },
            Finding::DanglingRelatedProject {
                project: "pavilion".to_string(),
                missing: "missing-project".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_duplicate_slugs_are_reported() {
    let json = r#"{
        "projects": [
            {"id": "a", "slug": "twin", "title": "A", "year": "2024", "category": "x",
             "mainImage": "", "gallery": [], "description": ""},
            {"id": "b", "slug": "twin", "title": "B", "year": "2024", "category": "x",
             "mainImage": "", "gallery": [], "description": ""}
        ],
        "categories": [{"id": "x", "name": "X", "slug": "x"}]
    }"#;

    let store = ContentStore::from_json_str(json).unwrap();
    assert_eq!(
        store.integrity_report().findings,
        vec![Finding::DuplicateProjectSlug {
            slug: "twin".to_string()
        }]
    );

    // First match wins
    let service = ContentService::new(store);
    assert_eq!(service.get_project_by_slug("twin").await.unwrap().id, "a");
}

#[test]
fn test_invalid_block_rejects_dataset() {
    let json = DATASET.replace(
        r#"{"type": "list", "items": ["Color", "Contrast"]}"#,
        r#"{"type": "list", "content": "no items"}"#,
    );

    match ContentStore::from_json_str(&json) {
        Err(StoreError::Parse(_)) => {}
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_service_from_config_uses_dataset_and_latency() {
    let file = write_dataset(DATASET);
    let config = ResolvedConfig {
        content_path: Some(file.path().to_path_buf()),
        latency: Duration::from_millis(5),
        ..Default::default()
    };

    let service = ContentService::from_config(&config).await.unwrap();
    assert_eq!(service.latency(), Duration::from_millis(5));

    let featured = service.get_featured_articles().await;
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].slug, "light");
}

#[tokio::test]
async fn test_service_from_config_missing_dataset() {
    let config = ResolvedConfig {
        content_path: Some("/nonexistent/artpill.json".into()),
        ..Default::default()
    };

    let result = ContentService::from_config(&config).await;
    assert!(matches!(result, Err(StoreError::Io { .. })));
}
