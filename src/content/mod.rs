//! Content module - blog posts, front-matter, and body rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub(crate) use loader::is_valid_slug;
pub use loader::{Adjacent, PostStore};
pub use markdown::MarkdownRenderer;
pub use post::{Post, PostMeta};
