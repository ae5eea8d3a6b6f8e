use validator::Validate;

use crate::{
    entities::experience::{Experience, NewExperience},
    errors::AppError,
    repositories::experience::ExperienceRepository,
    utils::valid_id::valid_id,
};

const NOT_FOUND: &str = "Experience not found";

pub struct ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub experience_repo: R,
}

impl<R> ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub fn new(experience_repo: R) -> Self {
        ExperienceHandler { experience_repo }
    }

    pub async fn list_experiences(&self) -> Result<Vec<Experience>, AppError> {
        self.experience_repo.get_all_experiences().await
            .map_err(|e| AppError::fetch_failed("experiences", e))
    }

    pub async fn get_experience(&self, experience_id: &str) -> Result<Experience, AppError> {
        let id = valid_id(experience_id, NOT_FOUND)?;

        self.experience_repo.get_experience(id).await
            .map_err(|e| AppError::fetch_failed("experience", e))?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn create_experience(&self, request: NewExperience) -> Result<Experience, AppError> {
        request.validate()?;
        self.experience_repo.create_experience(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{experience::MockExperienceRepository, memory_repo::MemoryRepo};

    #[tokio::test]
    async fn created_experience_is_retrievable() {
        let handler = ExperienceHandler::new(MemoryRepo::new());

        let created = handler
            .create_experience(NewExperience {
                company: "Acme".into(),
                position: "SRE".into(),
                location: Some("Remote".into()),
                start_date: "2022-04-01T00:00:00Z".parse().unwrap(),
                end_date: None,
                description: "On call".into(),
            })
            .await
            .unwrap();

        assert_eq!(handler.get_experience("1").await.unwrap(), created);
        assert!(matches!(handler.get_experience("2").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn store_faults_become_fetch_failures() {
        let mut repo = MockExperienceRepository::new();
        repo.expect_get_all_experiences()
            .returning(|| Err(AppError::InternalError("boom".into())));
        repo.expect_get_experience()
            .returning(|_| Err(AppError::InternalError("boom".into())));

        let handler = ExperienceHandler::new(repo);

        assert_eq!(handler.list_experiences().await.unwrap_err().to_string(), "Failed to fetch experiences");
        assert_eq!(handler.get_experience("1").await.unwrap_err().to_string(), "Failed to fetch experience");
    }
}
