//! Projects module - the project catalog and its listing filters

mod catalog;
pub mod filter;
mod project;

pub use catalog::ProjectCatalog;
pub use filter::{
    filter_projects, unique_categories, CategoryFilter, ProjectQuery, ALL_CATEGORIES,
};
pub use project::Project;
