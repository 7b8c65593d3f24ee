//! Project model

use serde::{Deserialize, Serialize};

/// A portfolio project, as stored in the project data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Unique lookup key
    pub slug: String,
    pub description: String,
    /// Primary filter axis of the projects listing
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub date: String,

    // Detail page fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub challenges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Project {
    /// Whether title, description, or any tag contains `needle`.
    /// `needle` must already be lowercase.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_fields() {
        let json = r#"{
            "id": "1",
            "title": "Energy Forecaster",
            "slug": "energy-forecaster",
            "description": "Day-ahead load forecasting",
            "category": "ML",
            "tags": ["Python", "LightGBM"],
            "featured": true,
            "image": "/img/energy.png",
            "github": "https://github.com/me/energy",
            "demo": null,
            "date": "2024-05-01",
            "longDescription": "Longer text",
            "teamSize": "2",
            "endDate": "2024-09-01"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.slug, "energy-forecaster");
        assert!(project.featured);
        assert_eq!(project.demo, None);
        assert_eq!(project.long_description.as_deref(), Some("Longer text"));
        assert_eq!(project.team_size.as_deref(), Some("2"));
        assert_eq!(project.end_date.as_deref(), Some("2024-09-01"));
        assert!(project.highlights.is_empty());
    }

    #[test]
    fn test_mentions_is_case_insensitive_over_three_fields() {
        let project: Project = serde_json::from_str(
            r#"{"id":"1","title":"Energy Forecaster","slug":"e","description":"Grid demand",
                "category":"ML","tags":["Python","LightGBM"]}"#,
        )
        .unwrap();

        assert!(project.mentions("energy"));
        assert!(project.mentions("demand"));
        assert!(project.mentions("lightgbm"));
        assert!(!project.mentions("rust"));
    }
}
