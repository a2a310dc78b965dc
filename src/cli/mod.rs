//! Command-line interface for artpill.
//!
//! Queries the content service the way page components do, lists the pages
//! of the static export, and checks a dataset before it is published.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::{self, ResolvedConfig};
use crate::domain::{Article, ArticleBlock, ArticleMetadata, Project};
use crate::service::{ContentApi, ContentService};
use crate::site::{self, Locale};

/// artpill - content layer of the ArtPill Studio website
#[derive(Parser, Debug)]
#[command(name = "artpill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print JSON instead of a listing
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List articles
    Articles {
        /// Only featured articles
        #[arg(short, long)]
        featured: bool,

        /// Only articles in this category id
        #[arg(short, long, conflicts_with = "featured")]
        category: Option<String>,
    },

    /// Show one article
    Article {
        slug: String,
    },

    /// List projects
    Projects {
        /// Only featured projects
        #[arg(short, long)]
        featured: bool,

        /// Only projects in this category id
        #[arg(short, long, conflicts_with = "featured")]
        category: Option<String>,
    },

    /// Show one project
    Project {
        slug: String,
    },

    /// List authors
    Authors,

    /// Show one author
    Author {
        id: String,
    },

    /// List categories
    Categories,

    /// Show one category
    Category {
        slug: String,
    },

    /// Resolve the related items of an article (or project)
    Related {
        slug: String,

        /// Look up a project instead of an article
        #[arg(long)]
        project: bool,
    },

    /// List every page of the static export
    Routes {
        /// Only pages of this locale
        #[arg(short, long)]
        locale: Option<Locale>,
    },

    /// Show the head metadata of a page
    Meta {
        /// Page path, e.g. /fr/contact
        path: String,
    },

    /// Report dangling references, duplicate slugs and unroutable slugs
    Check,

    /// Print the whole dataset as JSON
    Export,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = config::config()?;
        self.run(config).await
    }

    /// Execute against an already resolved configuration
    pub async fn run(self, config: &ResolvedConfig) -> Result<()> {
        if let Commands::Config = self.command {
            return show_config(config);
        }

        let service = ContentService::from_config(config)
            .await
            .context("Failed to load content")?;
        let out = Output { json: self.json };

        match self.command {
            Commands::Articles { featured, category } => {
                let articles = match (featured, category) {
                    (true, _) => service.get_featured_articles().await,
                    (false, Some(category)) => service.get_articles_by_category(&category).await,
                    (false, None) => service.get_all_articles().await,
                };
                out.list(&articles, print_article_row)
            }
            Commands::Article { slug } => {
                let article = service.get_article_by_slug(&slug).await;
                match article {
                    Some(article) if !out.json => show_article(&service, &article).await,
                    other => out.one(&other, "Article", &slug, |_| {}),
                }
            }
            Commands::Projects { featured, category } => {
                let projects = match (featured, category) {
                    (true, _) => service.get_featured_projects().await,
                    (false, Some(category)) => service.get_projects_by_category(&category).await,
                    (false, None) => service.get_all_projects().await,
                };
                out.list(&projects, print_project_row)
            }
            Commands::Project { slug } => {
                let project = service.get_project_by_slug(&slug).await;
                out.one(&project, "Project", &slug, show_project)
            }
            Commands::Authors => {
                let authors = service.get_all_authors().await;
                out.list(&authors, |a| println!("{:<22} {:<22} {}", a.id, a.name, a.role))
            }
            Commands::Author { id } => {
                let author = service.get_author_by_id(&id).await;
                out.one(&author, "Author", &id, |a| {
                    println!("{} ({})", a.name, a.role);
                    if let Some(avatar) = &a.avatar {
                        println!("Avatar: {}", avatar);
                    }
                })
            }
            Commands::Categories => {
                let categories = service.get_all_categories().await;
                out.list(&categories, |c| println!("{:<18} {}", c.slug, c.name))
            }
            Commands::Category { slug } => {
                let category = service.get_category_by_slug(&slug).await;
                out.one(&category, "Category", &slug, |c| {
                    println!("{} ({})", c.name, c.slug);
                    if let Some(description) = &c.description {
                        println!("{}", description);
                    }
                })
            }
            Commands::Related { slug, project } => {
                if project {
                    let related = service.get_related_projects(&slug).await;
                    out.list(&related, print_project_row)
                } else {
                    let related = service.get_related_articles(&slug).await;
                    out.list(&related, print_article_row)
                }
            }
            Commands::Routes { locale } => {
                let routes: Vec<String> = site::all_routes(&service)
                    .await
                    .into_iter()
                    .filter(|route| locale.is_none() || route.locale() == locale)
                    .map(|route| route.path())
                    .collect();
                out.list(&routes, |path| println!("{}", path))
            }
            Commands::Meta { path } => {
                let route = site::Route::parse(&path)?;
                let meta = site::page_meta(&service, &route, &config.site).await;
                if out.json {
                    return out.print_json(&meta);
                }
                show_meta(&meta);
                Ok(())
            }
            Commands::Check => {
                let report = service.store().integrity_report();
                if out.json {
                    out.print_json(&report)?;
                } else if report.is_clean() {
                    println!("No integrity problems found.");
                } else {
                    for finding in &report.findings {
                        println!("  - {}", finding);
                    }
                }

                if !report.is_clean() {
                    anyhow::bail!("{} integrity problem(s) found", report.findings.len());
                }
                Ok(())
            }
            Commands::Export => {
                println!("{}", service.store().to_json_pretty()?);
                Ok(())
            }
            Commands::Config => show_config(config),
        }
    }
}

/// Output mode shared by all commands
struct Output {
    json: bool,
}

impl Output {
    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{}", json);
        Ok(())
    }

    fn list<T: Serialize>(&self, items: &[T], row: impl Fn(&T)) -> Result<()> {
        if self.json {
            return self.print_json(items);
        }

        if items.is_empty() {
            println!("Nothing found.");
        }
        items.iter().for_each(row);
        Ok(())
    }

    /// A miss is reported, not treated as a failure
    fn one<T: Serialize>(
        &self,
        item: &Option<T>,
        kind: &str,
        key: &str,
        show: impl Fn(&T),
    ) -> Result<()> {
        if self.json {
            return self.print_json(item);
        }

        match item {
            Some(item) => show(item),
            None => println!("{} not found: {}", kind, key),
        }
        Ok(())
    }
}

fn print_article_row(article: &ArticleMetadata) {
    let marker = if article.featured { "*" } else { " " };
    println!(
        "{} {:<32} {:<18} {}",
        marker, article.slug, article.date, article.title
    );
}

fn print_project_row(project: &Project) {
    let marker = if project.featured { "*" } else { " " };
    println!(
        "{} {:<26} {:<5} {:<16} {}",
        marker, project.slug, project.year, project.category, project.title
    );
}

async fn show_article(service: &ContentService, article: &Article) -> Result<()> {
    let meta = &article.meta;
    let author = service
        .get_author_by_id(&meta.author)
        .await
        .map(|a| a.name)
        .unwrap_or_else(|| meta.author.clone());

    println!("{}", meta.title);
    println!("By {} \u{b7} {} \u{b7} {}", author, meta.date, meta.read_time);
    println!("Category: {}", meta.category);
    if !meta.tags.is_empty() {
        println!("Tags: {}", meta.tags.join(", "));
    }
    println!();

    for block in &article.content {
        match block {
            ArticleBlock::Heading { content } => println!("## {}", content),
            ArticleBlock::Subheading { content } => println!("### {}", content),
            ArticleBlock::Image { src, caption, .. } | ArticleBlock::Video { src, caption, .. } => {
                println!("[{}] {}", block.kind(), caption.as_deref().unwrap_or(src))
            }
            ArticleBlock::Quote { content, author } => match author {
                Some(author) => println!("> {} ({})", content, author),
                None => println!("> {}", content),
            },
            ArticleBlock::List { items, .. } => {
                for item in items {
                    println!("  - {}", item);
                }
            }
            ArticleBlock::Text { content } => println!("{}", content),
        }
        println!();
    }

    let related = service.get_related_articles(&meta.slug).await;
    if !related.is_empty() {
        println!("Related:");
        for item in related {
            println!("  {} ({})", item.title, item.slug);
        }
    }
    Ok(())
}

fn show_project(project: &Project) {
    println!("{}", project.title);
    if let Some(subtitle) = &project.subtitle {
        println!("{}", subtitle);
    }
    println!();

    let details = [
        ("Client", project.client.as_deref()),
        ("Location", project.location.as_deref()),
        ("Year", Some(project.year.as_str())),
        ("Category", Some(project.category.as_str())),
    ];
    for (label, value) in details {
        if let Some(value) = value {
            println!("{:<10} {}", format!("{}:", label), value);
        }
    }
    println!();
    println!("{}", project.description);

    if let Some(challenge) = &project.challenge {
        println!("\nChallenge: {}", challenge);
    }
    if let Some(solution) = &project.solution {
        println!("\nSolution: {}", solution);
    }
    if !project.team_members.is_empty() {
        println!("\nTeam: {}", project.team_members.join(", "));
    }
    println!("\nGallery: {} image(s)", project.gallery.len());
}

fn show_meta(meta: &site::PageMeta) {
    println!("Title:       {}", meta.title);
    println!("Description: {}", meta.description);
    println!("OpenGraph:   {} ({})", meta.og_type, meta.og_locale);
    if let Some(url) = &meta.url {
        println!("URL:         {}", url);
    }
    if let Some(image) = &meta.image {
        println!("Image:       {}", image);
    }
    if let Some(date) = meta.published_on {
        println!("Published:   {}", date);
    }
    if !meta.authors.is_empty() {
        println!("Authors:     {}", meta.authors.join(", "));
    }
}

fn show_config(config: &ResolvedConfig) -> Result<()> {
    println!("Config file: {}", match &config.config_file {
        Some(path) => path.display().to_string(),
        None => "(none)".to_string(),
    });
    println!("Content:     {}", match &config.content_path {
        Some(path) => path.display().to_string(),
        None => "(built-in dataset)".to_string(),
    });
    println!("Latency:     {} ms", config.latency.as_millis());
    println!("Site name:   {}", config.site.name);
    println!("Base URL:    {}", config.site.base_url);
    println!("Locale:      {}", config.site.default_locale);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken_dataset() -> ResolvedConfig {
        ResolvedConfig {
            content_path: Some("/nonexistent/artpill/content.json".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_config_command_does_not_load_content() {
        let cli = Cli {
            json: false,
            command: Commands::Config,
        };
        assert!(cli.run(&broken_dataset()).await.is_ok());
    }

    #[tokio::test]
    async fn test_content_commands_report_load_failure() {
        let cli = Cli {
            json: false,
            command: Commands::Authors,
        };
        let err = cli.run(&broken_dataset()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to load content"));
    }

    #[tokio::test]
    async fn test_meta_command_rejects_unknown_path() {
        let cli = Cli {
            json: true,
            command: Commands::Meta {
                path: "/de/contact".into(),
            },
        };
        assert!(cli.run(&ResolvedConfig::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_check_passes_on_seed() {
        let cli = Cli {
            json: true,
            command: Commands::Check,
        };
        assert!(cli.run(&ResolvedConfig::default()).await.is_ok());
    }
}
