//! Project catalog - the immutable project collection loaded from JSON

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::filter::{filter_projects, unique_categories};
use super::Project;
use crate::error::{Error, Result};

/// The full project collection, loaded once and shared read-only
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Build a catalog, rejecting duplicate slugs
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.slug.as_str()) {
                return Err(Error::DuplicateSlug {
                    slug: project.slug.clone(),
                });
            }
        }
        Ok(Self { projects })
    }

    /// Load the catalog from a JSON array file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No project data at {:?}", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::parse(&content, path)?;
        tracing::debug!("Loaded {} projects from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, Path::new("<inline>"))
    }

    fn parse(json: &str, path: &Path) -> Result<Self> {
        let projects: Vec<Project> =
            serde_json::from_str(json).map_err(|source| Error::ProjectData {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(projects)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// All project slugs, in data order
    pub fn slugs(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.slug.as_str()).collect()
    }

    /// The first `limit` featured projects, in data order
    pub fn featured(&self, limit: usize) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).take(limit).collect()
    }

    pub fn filter(&self, category: &str, query: &str) -> Vec<Project> {
        filter_projects(&self.projects, category, query)
    }

    pub fn categories(&self) -> Vec<String> {
        unique_categories(&self.projects)
    }
}
