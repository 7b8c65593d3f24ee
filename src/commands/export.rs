//! Export site data as JSON for the static page layer

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::Folio;

/// Counts of what an export wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub posts: usize,
    pub projects: usize,
    pub categories: usize,
}

/// Write post and project data under `out_dir`
///
/// Layout:
/// - `posts.json`: post summaries, newest first
/// - `posts/<slug>.json`: metadata and rendered HTML of each post
/// - `slugs.json`: post slugs for static route enumeration
/// - `projects.json`, `featured.json`, `categories.json`
pub fn run(folio: &Folio, out_dir: &Path) -> Result<ExportSummary> {
    let start = std::time::Instant::now();

    let store = folio.posts();
    let metas = store.all_posts_meta()?;
    let catalog = folio.projects()?;
    let categories = catalog.categories();

    let posts_out = out_dir.join("posts");
    fs::create_dir_all(&posts_out)?;

    write_json(&out_dir.join("posts.json"), &metas)?;
    write_json(&out_dir.join("slugs.json"), &store.all_slugs()?)?;
    for meta in &metas {
        let post = store.post_by_slug(&meta.slug)?;
        write_json(&posts_out.join(format!("{}.json", meta.slug)), &post)?;
    }

    write_json(&out_dir.join("projects.json"), catalog.projects())?;
    write_json(
        &out_dir.join("featured.json"),
        &catalog.featured(folio.config.featured_limit),
    )?;
    write_json(&out_dir.join("categories.json"), &categories)?;

    let summary = ExportSummary {
        posts: metas.len(),
        projects: catalog.len(),
        categories: categories.len(),
    };
    tracing::info!(
        "Exported {} posts and {} projects to {:?} in {:.2}s",
        summary.posts,
        summary.projects,
        out_dir,
        start.elapsed().as_secs_f64()
    );

    Ok(summary)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}
