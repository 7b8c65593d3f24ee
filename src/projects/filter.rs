//! Project listing filters
//!
//! The projects page narrows the catalog by a category selector and a
//! free-text search box. Both are expressed here as a typed predicate.

use std::collections::BTreeSet;

use super::Project;

/// Category selector value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Which categories a query admits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

/// A category selection combined with a search text
#[derive(Debug, Clone)]
pub struct ProjectQuery {
    pub category: CategoryFilter,
    /// Lowercased search text, empty for no text filter
    text: String,
}

impl ProjectQuery {
    pub fn new(category: impl Into<CategoryFilter>, text: &str) -> Self {
        Self {
            category: category.into(),
            text: text.to_lowercase(),
        }
    }

    /// A query that admits every project
    pub fn any() -> Self {
        Self::new(CategoryFilter::All, "")
    }

    pub fn matches(&self, project: &Project) -> bool {
        let category_ok = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        };
        category_ok && (self.text.is_empty() || project.mentions(&self.text))
    }

    /// Matching projects, borrowed, in input order
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Projects in `category` (or any, for `"all"`) mentioning `query`
pub fn filter_projects(projects: &[Project], category: &str, query: &str) -> Vec<Project> {
    ProjectQuery::new(category, query)
        .apply(projects)
        .into_iter()
        .cloned()
        .collect()
}

/// Distinct categories, sorted ascending
pub fn unique_categories(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
