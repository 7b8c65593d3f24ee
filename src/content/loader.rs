//! Content loader - loads posts from the posts directory

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post, PostMeta};
use crate::error::{Error, Result};
use crate::Folio;

/// Neighbours of a post in listing order
#[derive(Debug, Clone, Default)]
pub struct Adjacent {
    /// The next more recent post
    pub newer: Option<PostMeta>,
    /// The next older post
    pub older: Option<PostMeta>,
}

/// Read-only access to a directory of post files
pub struct PostStore {
    dir: PathBuf,
    extension: String,
    renderer: MarkdownRenderer,
}

impl PostStore {
    /// Create a store over `dir`, recognizing files ending in `.<extension>`
    pub fn new(dir: impl Into<PathBuf>, extension: &str, renderer: MarkdownRenderer) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
            renderer,
        }
    }

    /// Create a store for a site's configured posts directory
    pub fn for_site(folio: &Folio) -> Self {
        Self::new(
            &folio.posts_dir,
            &folio.config.post_extension,
            MarkdownRenderer::from_config(&folio.config),
        )
    }

    /// List all post summaries, newest first
    pub fn all_posts_meta(&self) -> Result<Vec<PostMeta>> {
        let mut metas = Vec::new();
        for (slug, path) in self.post_files() {
            let (fm, _) = read_post(&path)?;
            let meta = PostMeta::from_front_matter(&slug, fm);
            if !meta.date.is_empty() && meta.parsed_date().is_none() {
                tracing::warn!("Post {} has a non-ISO date {:?}", slug, meta.date);
            }
            metas.push(meta);
        }

        metas.sort_by(PostMeta::listing_order);
        tracing::debug!("Loaded {} posts from {:?}", metas.len(), self.dir);
        Ok(metas)
    }

    /// Load a single post and render its body
    pub fn post_by_slug(&self, slug: &str) -> Result<Post> {
        let not_found = || Error::NotFound {
            slug: slug.to_string(),
        };

        if !is_valid_slug(slug) {
            return Err(not_found());
        }

        let path = self.dir.join(format!("{}.{}", slug, self.extension));
        if !path.is_file() {
            return Err(not_found());
        }

        let (fm, body) = read_post(&path)?;
        let meta = PostMeta::from_front_matter(slug, fm);
        let html = self.renderer.render(&body);
        tracing::debug!("Rendered post {}", slug);

        Ok(Post { meta, html })
    }

    /// List the slugs of all posts, for static route enumeration
    pub fn all_slugs(&self) -> Result<Vec<String>> {
        let mut slugs: Vec<String> = self
            .post_files()
            .into_iter()
            .map(|(slug, _)| slug)
            .collect();
        slugs.sort();
        Ok(slugs)
    }

    /// Find the newer and older neighbours of a post
    pub fn adjacent(&self, slug: &str) -> Result<Adjacent> {
        let posts = self.all_posts_meta()?;
        let pos = posts
            .iter()
            .position(|p| p.slug == slug)
            .ok_or_else(|| Error::NotFound {
                slug: slug.to_string(),
            })?;

        Ok(Adjacent {
            newer: pos.checked_sub(1).map(|i| posts[i].clone()),
            older: posts.get(pos + 1).cloned(),
        })
    }

    /// Group post summaries by tag, keeping listing order within each tag
    pub fn posts_by_tag(&self) -> Result<BTreeMap<String, Vec<PostMeta>>> {
        let mut tags: BTreeMap<String, Vec<PostMeta>> = BTreeMap::new();
        for post in self.all_posts_meta()? {
            for tag in &post.tags {
                let entry = tags.entry(tag.clone()).or_default();
                if !entry.iter().any(|p| p.slug == post.slug) {
                    entry.push(post.clone());
                }
            }
        }
        Ok(tags)
    }

    /// Post files in the directory as (slug, path), sorted by file name
    fn post_files(&self) -> Vec<(String, PathBuf)> {
        if !self.dir.is_dir() {
            tracing::debug!("Posts directory {:?} does not exist", self.dir);
            return Vec::new();
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", self.dir, e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !self.has_post_extension(path) {
                continue;
            }

            match path.file_stem().and_then(|s| s.to_str()) {
                Some(slug) if is_valid_slug(slug) => {
                    files.push((slug.to_string(), path.to_path_buf()));
                }
                _ => tracing::warn!("Skipping post with unusable file name: {:?}", path),
            }
        }
        files
    }

    fn has_post_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e == self.extension)
            .unwrap_or(false)
    }
}

/// Read a post file and split it into front-matter and body
fn read_post(path: &Path) -> Result<(FrontMatter, String)> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let (fm, body) = FrontMatter::parse(&content).map_err(|source| Error::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((fm, body.to_string()))
}

/// A slug must name a file directly inside the posts directory
pub(crate) fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && !slug.contains(['/', '\\'])
        && !slug.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &Path) -> PostStore {
        PostStore::new(dir, "md", MarkdownRenderer::with_options("", false, true))
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_posts_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.md", "---\ntitle: A\ndate: 2024-01-01\n---\nA body");
        write(dir.path(), "b.md", "---\ntitle: B\ndate: 2024-06-01\n---\nB body");

        let posts = store(dir.path()).all_posts_meta().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);
    }

    #[test]
    fn test_equal_dates_break_ties_by_slug() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "zeta.md", "---\ndate: 2024-02-02\n---\n");
        write(dir.path(), "alpha.md", "---\ndate: 2024-02-02\n---\n");
        write(dir.path(), "mid.md", "---\ndate: 2024-02-02\n---\n");

        let posts = store(dir.path()).all_posts_meta().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bare.md", "No front matter here.");

        let posts = store(dir.path()).all_posts_meta().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "bare");
        assert_eq!(posts[0].date, "");
        assert_eq!(posts[0].summary, "");
        assert!(posts[0].tags.is_empty());
    }

    #[test]
    fn test_ignores_other_extensions_and_subdirs() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "post.md", "---\ntitle: Post\n---\n");
        write(dir.path(), "notes.txt", "not a post");
        fs::create_dir(dir.path().join("drafts.md")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        write(&dir.path().join("nested"), "deep.md", "---\ntitle: Deep\n---\n");

        let slugs = store(dir.path()).all_slugs().unwrap();
        assert_eq!(slugs, vec!["post"]);
    }

    #[test]
    fn test_tags_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "ml.md",
            "---\ntitle: ML\ntags: [Python, LightGBM, Forecasting]\n---\n",
        );

        let post = store(dir.path()).post_by_slug("ml").unwrap();
        assert_eq!(post.meta.tags, vec!["Python", "LightGBM", "Forecasting"]);
    }

    #[test]
    fn test_post_by_slug_renders_body() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "hello.md",
            "---\ntitle: Hello\ndate: 2024-03-01\nsummary: Hi\n---\n# Heading\n\nSome **bold** text.",
        );

        let post = store(dir.path()).post_by_slug("hello").unwrap();
        assert_eq!(post.meta.title, "Hello");
        assert_eq!(post.meta.summary, "Hi");
        assert!(post.html.contains("<h1>Heading</h1>"));
        assert!(post.html.contains("<strong>bold</strong>"));
        assert!(!post.html.contains("title: Hello"));
    }

    #[test]
    fn test_missing_post_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = store(dir.path()).post_by_slug("missing").unwrap_err();
        assert!(matches!(err, Error::NotFound { ref slug } if slug == "missing"));
    }

    #[test]
    fn test_path_like_slugs_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir(&posts).unwrap();
        write(dir.path(), "secret.md", "outside");

        let store = store(&posts);
        for slug in ["../secret", "", ".hidden", "a/b"] {
            assert!(store.post_by_slug(slug).unwrap_err().is_not_found());
        }
    }

    #[test]
    fn test_missing_directory_yields_empty_listings() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir.path().join("nope"));
        assert!(store.all_posts_meta().unwrap().is_empty());
        assert!(store.all_slugs().unwrap().is_empty());
        assert!(store.post_by_slug("any").unwrap_err().is_not_found());
    }

    #[test]
    fn test_malformed_front_matter_propagates() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bad.md", "---\ntitle: [oops\n---\nBody");

        let err = store(dir.path()).all_posts_meta().unwrap_err();
        assert!(matches!(err, Error::FrontMatter { .. }));
    }

    #[test]
    fn test_non_iso_date_is_kept_as_text() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "loose.md", "---\ndate: June 2024\n---\n");

        let posts = store(dir.path()).all_posts_meta().unwrap();
        assert_eq!(posts[0].date, "June 2024");
        assert!(posts[0].parsed_date().is_none());
    }

    #[test]
    fn test_adjacent_posts() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "one.md", "---\ndate: 2024-01-01\n---\n");
        write(dir.path(), "two.md", "---\ndate: 2024-02-01\n---\n");
        write(dir.path(), "three.md", "---\ndate: 2024-03-01\n---\n");
        let store = store(dir.path());

        let adj = store.adjacent("two").unwrap();
        assert_eq!(adj.newer.map(|p| p.slug), Some("three".to_string()));
        assert_eq!(adj.older.map(|p| p.slug), Some("one".to_string()));

        let newest = store.adjacent("three").unwrap();
        assert!(newest.newer.is_none());
        assert!(store.adjacent("four").unwrap_err().is_not_found());
    }

    #[test]
    fn test_posts_by_tag() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.md", "---\ndate: 2024-01-01\ntags: [rust, web]\n---\n");
        write(dir.path(), "b.md", "---\ndate: 2024-05-01\ntags: [rust, rust]\n---\n");

        let tags = store(dir.path()).posts_by_tag().unwrap();
        let keys: Vec<_> = tags.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["rust", "web"]);
        let rust: Vec<_> = tags["rust"].iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(rust, vec!["b", "a"]);
    }
}
