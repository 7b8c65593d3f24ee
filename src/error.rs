//! Error types for the content and project pipelines

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading posts, projects, or site configuration
#[derive(Error, Debug)]
pub enum Error {
    /// No post file exists for the requested slug
    #[error("post not found: {slug}")]
    NotFound { slug: String },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid project data in {path:?}: {source}")]
    ProjectData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two projects in the catalog share a slug
    #[error("duplicate project slug: {slug}")]
    DuplicateSlug { slug: String },

    #[error("invalid site configuration in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the requested item does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
