use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::query_params::QueryValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
    #[serde(with = "featured_flag")]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,

    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,

    pub technologies: Vec<String>,

    #[serde(default, with = "featured_flag")]
    pub featured: bool,
}

impl NewProject {
    pub fn prepare_for_insert(self, id: i32, now: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            live_url: self.live_url,
            github_url: self.github_url,
            technologies: self.technologies,
            featured: self.featured,
            created_at: now,
        }
    }
}

/// Query string for `GET /api/projects`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub featured: QueryValue,
}

impl ProjectFilter {
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        ProjectFilter { featured: QueryValue::collect(pairs, "featured") }
    }

    /// Only a single literal `"true"` selects featured projects.
    pub fn featured_only(&self) -> bool {
        self.featured.single() == Some("true")
    }
}

/// `featured` travels as the string `"true"`/`"false"`; it is a `bool` everywhere else.
mod featured_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Flag(bool),
    }

    pub fn serialize<S: Serializer>(featured: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *featured { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text == "true",
            Raw::Flag(flag) => flag,
        })
    }
}
