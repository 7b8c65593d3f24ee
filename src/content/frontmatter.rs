//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A YAML scalar carried as text
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Str(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Accepts any scalar (`date: 2024-01-01`, `title: 1984`) as a string
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

/// Accepts both a single scalar and a list of scalars
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Scalar),
        Many(Vec<Scalar>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s.into_string()],
        Some(OneOrMany::Many(items)) => items.into_iter().map(Scalar::into_string).collect(),
    })
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let content = content.trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };

        // The opening fence must stand alone on its line
        let rest = match rest.find('\n') {
            Some(pos) if rest[..pos].trim().is_empty() => &rest[pos + 1..],
            _ => return Ok((FrontMatter::default(), content)),
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == "---" {
                let yaml = &rest[..offset];
                let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);
                return Ok((Self::from_yaml(yaml)?, body));
            }
            offset += line.len();
        }

        // No closing fence, treat as no front-matter
        Ok((FrontMatter::default(), content))
    }

    fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let has_keys = yaml.lines().any(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        });
        if !has_keys {
            return Ok(FrontMatter::default());
        }
        serde_yaml::from_str(yaml)
    }
}
