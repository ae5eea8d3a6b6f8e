use validator::Validate;

use crate::{
    entities::profile::{NewProfile, Profile, ProfileUpdate},
    errors::AppError,
    repositories::profile::ProfileRepository,
    utils::valid_id::valid_id,
};

const NOT_FOUND: &str = "Profile not found";

pub struct ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub profile_repo: R,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repo: R) -> Self {
        ProfileHandler { profile_repo }
    }

    /// The portfolio owner's profile: the first one stored, if any
    pub async fn get_primary_profile(&self) -> Result<Option<Profile>, AppError> {
        let profiles = self.profile_repo.get_all_profiles().await
            .map_err(|e| AppError::fetch_failed("profile", e))?;

        Ok(profiles.into_iter().next())
    }

    /// Retrieves a profile by its path id
    pub async fn get_profile(&self, profile_id: &str) -> Result<Profile, AppError> {
        let id = valid_id(profile_id, NOT_FOUND)?;

        self.profile_repo.get_profile(id).await
            .map_err(|e| AppError::fetch_failed("profile", e))?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Validates and stores a new profile
    pub async fn create_profile(&self, request: NewProfile) -> Result<Profile, AppError> {
        request.validate()?;

        let profile = self.profile_repo.create_profile(request).await?;
        tracing::info!(profile_id = profile.id, "Created profile");
        Ok(profile)
    }

    /// Applies a partial update to an existing profile
    pub async fn update_profile(&self, profile_id: &str, update: ProfileUpdate) -> Result<Profile, AppError> {
        update.validate()?;

        let id = valid_id(profile_id, NOT_FOUND)?;

        self.profile_repo.update_profile(id, update).await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }
}
