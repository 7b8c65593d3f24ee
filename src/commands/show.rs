//! Show a single post or project, or a filtered project listing

use anyhow::{Context, Result};

use crate::Folio;

/// Print a post's metadata and rendered body
pub fn post(folio: &Folio, slug: &str) -> Result<()> {
    let store = folio.posts();
    let post = store.post_by_slug(slug)?;

    println!("<!-- {} | {} -->", post.meta.title, post.meta.date);
    if !post.meta.tags.is_empty() {
        println!("<!-- tags: {} -->", post.meta.tags.join(", "));
    }
    println!("{}", post.html);

    let adjacent = store.adjacent(slug)?;
    if let Some(newer) = adjacent.newer {
        println!("<!-- newer: {} -->", newer.slug);
    }
    if let Some(older) = adjacent.older {
        println!("<!-- older: {} -->", older.slug);
    }

    Ok(())
}

/// Print a project as JSON
pub fn project(folio: &Folio, slug: &str) -> Result<()> {
    let catalog = folio.projects()?;
    let project = catalog
        .by_slug(slug)
        .with_context(|| format!("project not found: {}", slug))?;
    println!("{}", serde_json::to_string_pretty(project)?);
    Ok(())
}

/// Print the projects matching a category and search text
pub fn projects(folio: &Folio, category: &str, query: &str) -> Result<()> {
    let catalog = folio.projects()?;
    let matches = catalog.filter(category, query);

    tracing::debug!(
        "Filter category={:?} query={:?} matched {} of {}",
        category,
        query,
        matches.len(),
        catalog.len()
    );

    if matches.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    for project in matches {
        println!("{} [{}]", project.title, project.slug);
        println!("  {} | {}", project.category, project.tags.join(", "));
        println!("  {}", project.description);
    }

    Ok(())
}
