use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::education::{Education, NewEducation},
    errors::AppError,
    repositories::memory_repo::{newest_first, MemoryRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn get_education(&self, id: i32) -> Result<Option<Education>, AppError>;

    /// All education entries, most recent `start_date` first
    async fn get_all_education(&self) -> Result<Vec<Education>, AppError>;

    async fn create_education(&self, education: NewEducation) -> Result<Education, AppError>;
}

#[async_trait]
impl EducationRepository for MemoryRepo {
    async fn get_education(&self, id: i32) -> Result<Option<Education>, AppError> {
        Ok(self.education().read().get(id))
    }

    async fn get_all_education(&self) -> Result<Vec<Education>, AppError> {
        let mut education = self.education().read().all();
        newest_first(&mut education, |e| e.start_date);
        Ok(education)
    }

    async fn create_education(&self, education: NewEducation) -> Result<Education, AppError> {
        let now = Utc::now();
        Ok(self.education().write().insert_with(|id| education.prepare_for_insert(id, now)))
    }
}
