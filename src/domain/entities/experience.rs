use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i32,
    pub company: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    /// `None` means this is the current position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_experience_dates"))]
pub struct NewExperience {
    #[validate(length(min = 1, message = "Company cannot be empty"))]
    pub company: String,

    #[validate(length(min = 1, message = "Position cannot be empty"))]
    pub position: String,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(deserialize_with = "timestamp::utc")]
    pub start_date: DateTime<Utc>,

    #[serde(default, deserialize_with = "timestamp::utc_option")]
    pub end_date: Option<DateTime<Utc>>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,
}

fn validate_experience_dates(experience: &NewExperience) -> Result<(), ValidationError> {
    match experience.end_date {
        Some(end) if end < experience.start_date => {
            let mut err = ValidationError::new("invalid_date_range");
            err.message = Some("End date cannot be before start date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

impl NewExperience {
    pub fn prepare_for_insert(self, id: i32, now: DateTime<Utc>) -> Experience {
        Experience {
            id,
            company: self.company,
            position: self.position,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            created_at: now,
        }
    }
}
