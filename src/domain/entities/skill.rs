use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::query_params::QueryValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Devops,
    Tools,
    Languages,
    Frameworks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Display, PartialEq)]
#[display("unknown skill category: {_0}")]
pub struct UnknownCategory(pub String);

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Devops,
        SkillCategory::Tools,
        SkillCategory::Languages,
        SkillCategory::Frameworks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Devops => "devops",
            SkillCategory::Tools => "tools",
            SkillCategory::Languages => "languages",
            SkillCategory::Frameworks => "frameworks",
        }
    }
}

/// Exact, case-sensitive match on the wire name.
impl FromStr for SkillCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    #[validate(length(min = 1, message = "Skill name cannot be empty"))]
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    #[serde(default)]
    pub icon: Option<String>,
}

impl NewSkill {
    pub fn prepare_for_insert(self, id: i32, now: DateTime<Utc>) -> Skill {
        Skill {
            id,
            name: self.name,
            category: self.category,
            proficiency: self.proficiency,
            icon: self.icon,
            created_at: now,
        }
    }
}

/// Query string for `GET /api/skills`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillFilter {
    pub category: QueryValue,
}

impl SkillFilter {
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        SkillFilter { category: QueryValue::collect(pairs, "category") }
    }

    pub fn by_category(category: &str) -> Self {
        SkillFilter { category: QueryValue::Single(category.to_string()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parsing_is_case_sensitive() {
        assert_eq!("frontend".parse::<SkillCategory>(), Ok(SkillCategory::Frontend));
        assert_eq!(
            "Frontend".parse::<SkillCategory>(),
            Err(UnknownCategory("Frontend".into()))
        );
        assert!("".parse::<SkillCategory>().is_err());
    }

    #[test]
    fn display_matches_serde_name() {
        for category in SkillCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.to_string());
        }
    }

    #[test]
    fn new_skill_reads_wire_names() {
        let skill: NewSkill = serde_json::from_str(
            r#"{"name": "Rust", "category": "languages", "proficiency": "expert"}"#,
        )
        .unwrap();

        assert_eq!(skill.category, SkillCategory::Languages);
        assert_eq!(skill.proficiency, Proficiency::Expert);
        assert_eq!(skill.icon, None);
    }

    #[test]
    fn filter_keeps_repeated_categories() {
        let query = vec![
            ("category".to_string(), "frontend".to_string()),
            ("category".to_string(), "backend".to_string()),
        ];

        let filter = SkillFilter::from_query(&query);

        assert!(matches!(filter.category, QueryValue::Repeated(ref v) if v.len() == 2));
        assert_eq!(SkillFilter::from_query(&[]), SkillFilter::default());
    }
}
