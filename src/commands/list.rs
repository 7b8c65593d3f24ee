//! List site content

use anyhow::Result;

use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = folio.posts().all_posts_meta()?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                let date = if post.date.is_empty() {
                    "----------"
                } else {
                    post.date.as_str()
                };
                println!("  {} - {} [{}]", date, post.title, post.slug);
            }
        }
        "slug" | "slugs" => {
            for slug in folio.posts().all_slugs()? {
                println!("{}", slug);
            }
        }
        "tag" | "tags" => {
            let tags = folio.posts().posts_by_tag()?;
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().map(|(t, p)| (t, p.len())).collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "project" | "projects" => {
            let catalog = folio.projects()?;
            println!("Projects ({}):", catalog.len());
            for project in catalog.projects() {
                let star = if project.featured { "*" } else { " " };
                println!(
                    "  {} {} - {} [{}]",
                    star, project.category, project.title, project.slug
                );
            }
        }
        "featured" => {
            let catalog = folio.projects()?;
            for project in catalog.featured(folio.config.featured_limit) {
                println!("  {} [{}]", project.title, project.slug);
            }
        }
        "category" | "categories" => {
            let catalog = folio.projects()?;
            let categories = catalog.categories();
            println!("Categories ({}):", categories.len());
            for category in categories {
                let count = catalog.filter(&category, "").len();
                println!("  {} ({})", category, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, slug, tag, project, featured, category",
                content_type
            );
        }
    }

    Ok(())
}
