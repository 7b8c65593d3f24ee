//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub url: String,

    // Directory
    pub content_dir: String,
    /// Post directory, relative to `content_dir`
    pub posts_dir: String,
    pub post_extension: String,
    /// Project data file, relative to `content_dir`
    pub projects_file: String,

    // Home page
    pub featured_limit: usize,

    // Rendering
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: String::new(),
            url: "http://localhost:3000".to_string(),

            content_dir: "content".to_string(),
            posts_dir: "posts".to_string(),
            post_extension: "md".to_string(),
            projects_file: "data/projects.json".to_string(),

            featured_limit: 3,

            markdown: MarkdownConfig::default(),
            highlight: HighlightConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).map_err(|source| Error::Config {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }
}

/// Markdown body conversion options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Render single newlines inside a paragraph as `<br />`
    pub breaks: bool,
    /// Turn bare URLs in post bodies into links
    pub linkify: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            breaks: true,
            linkify: true,
        }
    }
}

/// Code block highlighting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
        }
    }
}
