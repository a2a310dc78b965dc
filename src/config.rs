//! Configuration for the content layer.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (ARTPILL_CONTENT, ARTPILL_LATENCY_MS, ARTPILL_SITE_URL)
//! 2. Project config file (.artpill/config.yaml, searched upward from the
//!    current directory), else the user config (<config_dir>/artpill/config.yaml)
//! 3. Defaults (built-in dataset, no latency)
//!
//! Paths in a project config file are relative to the project root (the
//! directory containing `.artpill/`).

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::site::Locale;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const DEFAULT_SITE_NAME: &str = "ArtPill Studio";
pub const DEFAULT_BASE_URL: &str = "https://artpill.studio";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// Dataset document (relative to project root)
    pub path: Option<String>,
    /// Artificial delay before every read
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    pub name: Option<String>,
    pub base_url: Option<String>,
    pub default_locale: Option<Locale>,
}

/// Values read from the environment
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub content: Option<String>,
    pub latency_ms: Option<String>,
    pub site_url: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            content: std::env::var("ARTPILL_CONTENT").ok(),
            latency_ms: std::env::var("ARTPILL_LATENCY_MS").ok(),
            site_url: std::env::var("ARTPILL_SITE_URL").ok(),
        }
    }
}

/// Site identity used in page metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub name: String,
    pub base_url: String,
    pub default_locale: Locale,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_SITE_NAME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_locale: Locale::default(),
        }
    }
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// Dataset document; the built-in dataset is used when absent
    pub content_path: Option<PathBuf>,
    /// Artificial read latency
    pub latency: Duration,
    pub site: SiteSettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".artpill").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let user_config = dirs::config_dir()?.join("artpill").join("config.yaml");
    user_config.exists().then_some(user_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Merge a config file (if any) with environment overrides
pub fn resolve(config_file: Option<&Path>, env: &EnvOverrides) -> Result<ResolvedConfig> {
    let (file, base_dir) = match config_file {
        Some(path) => {
            let file = load_config_file(path)?;
            // Base directory is the parent of .artpill/ (i.e., grandparent of config.yaml)
            let base_dir = path
                .parent()
                .and_then(|p| p.parent())
                .unwrap_or(Path::new("."))
                .to_path_buf();
            (Some(file), base_dir)
        }
        None => (None, PathBuf::from(".")),
    };

    let content = file.as_ref().map(|f| f.content.clone()).unwrap_or_default();
    let site = file.as_ref().map(|f| f.site.clone()).unwrap_or_default();

    let content_path = match (&env.content, &content.path) {
        (Some(env_path), _) => Some(PathBuf::from(env_path)),
        (None, Some(path)) => Some(resolve_path(&base_dir, path)),
        (None, None) => None,
    };

    let latency_ms = match &env.latency_ms {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid ARTPILL_LATENCY_MS: {}", raw))?,
        None => content.latency_ms.unwrap_or(0),
    };

    let defaults = SiteSettings::default();
    let site = SiteSettings {
        name: site.name.unwrap_or(defaults.name),
        base_url: env
            .site_url
            .clone()
            .or(site.base_url)
            .unwrap_or(defaults.base_url)
            .trim_end_matches('/')
            .to_string(),
        default_locale: site.default_locale.unwrap_or(defaults.default_locale),
    };

    Ok(ResolvedConfig {
        content_path,
        latency: Duration::from_millis(latency_ms),
        site,
        config_file: config_file.map(Path::to_path_buf),
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();
    resolve(config_file.as_deref(), &EnvOverrides::from_env())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
