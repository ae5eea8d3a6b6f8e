use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::experience::{Experience, NewExperience},
    errors::AppError,
    repositories::memory_repo::{newest_first, MemoryRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn get_experience(&self, id: i32) -> Result<Option<Experience>, AppError>;

    /// All experiences, most recent `start_date` first
    async fn get_all_experiences(&self) -> Result<Vec<Experience>, AppError>;

    async fn create_experience(&self, experience: NewExperience) -> Result<Experience, AppError>;
}

#[async_trait]
impl ExperienceRepository for MemoryRepo {
    async fn get_experience(&self, id: i32) -> Result<Option<Experience>, AppError> {
        Ok(self.experiences().read().get(id))
    }

    async fn get_all_experiences(&self) -> Result<Vec<Experience>, AppError> {
        let mut experiences = self.experiences().read().all();
        newest_first(&mut experiences, |e| e.start_date);
        Ok(experiences)
    }

    async fn create_experience(&self, experience: NewExperience) -> Result<Experience, AppError> {
        let now = Utc::now();
        Ok(self.experiences().write().insert_with(|id| experience.prepare_for_insert(id, now)))
    }
}
