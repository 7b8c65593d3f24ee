//! folio: content pipeline for a portfolio site
//!
//! This crate loads the site's blog posts (Markdown files with YAML
//! front-matter) and its project catalog (a JSON data file), and exposes
//! the listing, lookup, and filtering operations the page layer renders.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod projects;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

use content::PostStore;
use projects::ProjectCatalog;

/// A portfolio site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Directory holding post files
    pub posts_dir: PathBuf,
    /// Project data file
    pub projects_file: PathBuf,
}

impl Folio {
    /// Create a new site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site instance with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let posts_dir = content_dir.join(&config.posts_dir);
        let projects_file = content_dir.join(&config.projects_file);

        Self {
            config,
            base_dir,
            content_dir,
            posts_dir,
            projects_file,
        }
    }

    /// Open the site's post store
    pub fn posts(&self) -> PostStore {
        PostStore::for_site(self)
    }

    /// Load the site's project catalog
    pub fn projects(&self) -> Result<ProjectCatalog> {
        ProjectCatalog::load(&self.projects_file)
    }
}
