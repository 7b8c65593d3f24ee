//! Post models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::FrontMatter;

/// Summary of a blog post, as shown in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Filename without extension
    pub slug: String,

    pub title: String,

    /// ISO calendar date (`YYYY-MM-DD`), empty when undeclared
    pub date: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl PostMeta {
    /// Build metadata from parsed front-matter, defaulting missing fields
    pub fn from_front_matter(slug: &str, fm: FrontMatter) -> Self {
        Self {
            slug: slug.to_string(),
            title: fm.title.unwrap_or_else(|| slug.to_string()),
            date: fm.date.unwrap_or_default(),
            summary: fm.summary.unwrap_or_default(),
            tags: fm.tags,
        }
    }

    /// The declared date as a calendar date, if it is one
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let date = self.date.trim();
        // Tolerate full timestamps by reading the date part only
        let date = date.get(..10).unwrap_or(date);
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }

    /// Listing order: newest date first, then slug ascending
    pub fn listing_order(a: &PostMeta, b: &PostMeta) -> Ordering {
        b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug))
    }
}

/// A fully loaded post with its rendered body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    /// Body rendered to an HTML fragment
    pub html: String,
}
