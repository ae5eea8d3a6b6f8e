use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: i32,
    pub institution: String,
    pub degree: String,
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    /// `None` means still in progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_education_dates"))]
pub struct NewEducation {
    #[validate(length(min = 1, message = "Institution cannot be empty"))]
    pub institution: String,

    #[validate(length(min = 1, message = "Degree cannot be empty"))]
    pub degree: String,

    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub field: String,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(deserialize_with = "timestamp::utc")]
    pub start_date: DateTime<Utc>,

    #[serde(default, deserialize_with = "timestamp::utc_option")]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub description: Option<String>,
}

fn validate_education_dates(education: &NewEducation) -> Result<(), ValidationError> {
    match education.end_date {
        Some(end) if end < education.start_date => {
            let mut err = ValidationError::new("invalid_date_range");
            err.message = Some("End date cannot be before start date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

impl NewEducation {
    pub fn prepare_for_insert(self, id: i32, now: DateTime<Utc>) -> Education {
        Education {
            id,
            institution: self.institution,
            degree: self.degree,
            field: self.field,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            created_at: now,
        }
    }
}
