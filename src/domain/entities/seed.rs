use serde::Deserialize;
use validator::Validate;

use crate::{
    entities::{
        education::NewEducation, experience::NewExperience, profile::NewProfile,
        project::NewProject, skill::NewSkill,
    },
    errors::AppError,
};

const DEMO_FIXTURE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/demo_seed.json"));

/// Records inserted into a fresh store at startup, in fixture order.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub profiles: Vec<NewProfile>,
    #[serde(default)]
    pub skills: Vec<NewSkill>,
    #[serde(default)]
    pub projects: Vec<NewProject>,
    #[serde(default)]
    pub experiences: Vec<NewExperience>,
    #[serde(default)]
    pub education: Vec<NewEducation>,
}

impl SeedData {
    /// The demonstration portfolio compiled into the binary.
    pub fn demo() -> Result<Self, serde_json::Error> {
        Self::from_json(DEMO_FIXTURE)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.profiles.iter().try_for_each(|p| p.validate())?;
        self.skills.iter().try_for_each(|s| s.validate())?;
        self.projects.iter().try_for_each(|p| p.validate())?;
        self.experiences.iter().try_for_each(|e| e.validate())?;
        self.education.iter().try_for_each(|e| e.validate())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_fixture_parses_and_validates() {
        let seed = SeedData::demo().unwrap();

        assert_eq!(seed.profiles.len(), 1);
        assert_eq!(seed.skills.len(), 6);
        assert_eq!(seed.projects.len(), 3);
        assert_eq!(seed.experiences.len(), 3);
        assert_eq!(seed.education.len(), 2);
        assert!(seed.validate().is_ok());
    }

    #[test]
    fn unknown_sections_are_rejected() {
        assert!(SeedData::from_json(r#"{"blogPosts": []}"#).is_err());
    }

    #[test]
    fn invalid_records_fail_validation() {
        let seed = SeedData::from_json(
            r#"{"skills": [{"name": "", "category": "tools", "proficiency": "beginner"}]}"#,
        )
        .unwrap();

        assert!(matches!(seed.validate(), Err(AppError::ValidationError(_))));
    }
}
