//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::is_valid_slug;
use crate::Folio;

/// Create a post file with front-matter for `title`, returning its path
pub fn create_post(folio: &Folio, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let today = chrono::Local::now().date_naive();

    let slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title: {:?}", title);
    }
    if !is_valid_slug(&slug) {
        anyhow::bail!("Slug must be a plain file name: {:?}", slug);
    }

    fs::create_dir_all(&folio.posts_dir)?;

    let file_path = folio
        .posts_dir
        .join(format!("{}.{}", slug, folio.config.post_extension));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\nsummary: \"\"\ntags: []\n---\n",
        serde_json::to_string(title)?,
        today.format("%Y-%m-%d")
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_create_post_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::with_config(dir.path().to_path_buf(), SiteConfig::default());

        let path = create_post(&folio, "Hello: World", None).unwrap();
        assert!(path.ends_with("content/posts/hello-world.md"));

        let post = folio.posts().post_by_slug("hello-world").unwrap();
        assert_eq!(post.meta.title, "Hello: World");
        assert!(post.meta.parsed_date().is_some());
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::with_config(dir.path().to_path_buf(), SiteConfig::default());

        create_post(&folio, "Twice", Some("twice")).unwrap();
        assert!(create_post(&folio, "Twice again", Some("twice")).is_err());
    }

    #[test]
    fn test_create_post_refuses_unloadable_slugs() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::with_config(dir.path().to_path_buf(), SiteConfig::default());

        for slug in ["v1..2", ".hidden", "a/b", "..\\up"] {
            assert!(create_post(&folio, "Release", Some(slug)).is_err(), "{}", slug);
        }
        assert!(folio.posts().all_slugs().unwrap().is_empty());

        create_post(&folio, "Release", Some("v1.2")).unwrap();
        assert_eq!(folio.posts().all_slugs().unwrap(), vec!["v1.2"]);
    }
}
