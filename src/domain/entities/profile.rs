use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::option_fields::PatchString;

// ───── Stored Model ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Bio cannot be empty"))]
    pub bio: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
}

/// Partial profile update. Absent keys leave the stored value untouched;
/// nullable fields can be cleared with an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Bio cannot be empty"))]
    pub bio: Option<String>,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,

    #[serde(default)]
    pub location: PatchString,
    #[serde(default)]
    pub phone: PatchString,
    #[serde(default)]
    pub avatar: PatchString,
    #[serde(default)]
    pub resume_url: PatchString,
    #[serde(default)]
    pub github_url: PatchString,
    #[serde(default)]
    pub linkedin_url: PatchString,
    #[serde(default)]
    pub twitter_url: PatchString,
}

// ───── Insert / Update Preparation ──────────────────────────────────

impl NewProfile {
    pub fn prepare_for_insert(self, id: i32, now: DateTime<Utc>) -> Profile {
        Profile {
            id,
            name: self.name,
            title: self.title,
            bio: self.bio,
            email: self.email,
            location: self.location,
            phone: self.phone,
            avatar: self.avatar,
            resume_url: self.resume_url,
            github_url: self.github_url,
            linkedin_url: self.linkedin_url,
            twitter_url: self.twitter_url,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ProfileUpdate {
    /// Merges the provided fields into `profile`. Timestamps are left to the caller.
    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(title) = self.title {
            profile.title = title;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        self.location.apply_to(&mut profile.location);
        self.phone.apply_to(&mut profile.phone);
        self.avatar.apply_to(&mut profile.avatar);
        self.resume_url.apply_to(&mut profile.resume_url);
        self.github_url.apply_to(&mut profile.github_url);
        self.linkedin_url.apply_to(&mut profile.linkedin_url);
        self.twitter_url.apply_to(&mut profile.twitter_url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::option_fields::OptionField;

    fn sample() -> Profile {
        NewProfile {
            name: "Ada Lovelace".into(),
            title: "Engineer".into(),
            bio: "Writes programs".into(),
            email: "ada@example.com".into(),
            phone: Some("555".into()),
            ..NewProfile::default()
        }
        .prepare_for_insert(1, Utc::now())
    }

    #[test]
    fn serializes_camel_case_and_omits_missing_fields() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["name"], "Ada Lovelace");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("githubUrl").is_none());
        assert!(json.get("resume_url").is_none());
    }

    #[test]
    fn update_changes_only_named_fields() {
        let mut profile = sample();
        let before = profile.clone();

        ProfileUpdate {
            title: Some("Principal Engineer".into()),
            phone: Option::<Option<String>>::Some(None).into(),
            ..ProfileUpdate::default()
        }
        .apply_to(&mut profile);

        assert_eq!(profile.title, "Principal Engineer");
        assert_eq!(profile.phone, None);
        assert_eq!(profile.name, before.name);
        assert_eq!(profile.email, before.email);
        assert_eq!(profile.updated_at, before.updated_at);
    }

    #[test]
    fn update_deserializes_from_partial_json() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"title": "CTO", "githubUrl": null}"#).unwrap();

        assert_eq!(update.title.as_deref(), Some("CTO"));
        assert!(update.name.is_none());
        assert_eq!(update.github_url, OptionField::SetToNull);
        assert!(update.location.is_unchanged());
    }

    #[test]
    fn rejects_invalid_email() {
        let profile = NewProfile {
            name: "x".into(),
            title: "x".into(),
            bio: "x".into(),
            email: "not-an-email".into(),
            ..NewProfile::default()
        };

        assert!(profile.validate().is_err());
    }
}
