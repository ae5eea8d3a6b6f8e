use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::profile::{NewProfile, Profile, ProfileUpdate},
    errors::AppError,
    repositories::memory_repo::{later_than, MemoryRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Retrieves a profile by id, `None` when absent
    async fn get_profile(&self, id: i32) -> Result<Option<Profile>, AppError>;

    /// Retrieves every profile in insertion order
    async fn get_all_profiles(&self) -> Result<Vec<Profile>, AppError>;

    /// Stores a new profile with the next id and fresh timestamps
    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, AppError>;

    /// Merges `update` into an existing profile and refreshes `updated_at`
    async fn update_profile(&self, id: i32, update: ProfileUpdate) -> Result<Option<Profile>, AppError>;
}

#[async_trait]
impl ProfileRepository for MemoryRepo {
    async fn get_profile(&self, id: i32) -> Result<Option<Profile>, AppError> {
        Ok(self.profiles().read().get(id))
    }

    async fn get_all_profiles(&self) -> Result<Vec<Profile>, AppError> {
        Ok(self.profiles().read().all())
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, AppError> {
        let now = Utc::now();
        Ok(self.profiles().write().insert_with(|id| profile.prepare_for_insert(id, now)))
    }

    async fn update_profile(&self, id: i32, update: ProfileUpdate) -> Result<Option<Profile>, AppError> {
        let mut profiles = self.profiles().write();

        let Some(profile) = profiles.get_mut(id) else {
            return Ok(None);
        };

        update.apply_to(profile);
        profile.updated_at = later_than(profile.updated_at);

        Ok(Some(profile.clone()))
    }
}
