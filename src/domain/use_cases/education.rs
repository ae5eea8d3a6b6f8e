use validator::Validate;

use crate::{
    entities::education::{Education, NewEducation},
    errors::AppError,
    repositories::education::EducationRepository,
    utils::valid_id::valid_id,
};

const NOT_FOUND: &str = "Education not found";

pub struct EducationHandler<R>
where
    R: EducationRepository,
{
    pub education_repo: R,
}

impl<R> EducationHandler<R>
where
    R: EducationRepository,
{
    pub fn new(education_repo: R) -> Self {
        EducationHandler { education_repo }
    }

    pub async fn list_education(&self) -> Result<Vec<Education>, AppError> {
        self.education_repo.get_all_education().await
            .map_err(|e| AppError::fetch_failed("education", e))
    }

    pub async fn get_education(&self, education_id: &str) -> Result<Education, AppError> {
        let id = valid_id(education_id, NOT_FOUND)?;

        self.education_repo.get_education(id).await
            .map_err(|e| AppError::fetch_failed("education", e))?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn create_education(&self, request: NewEducation) -> Result<Education, AppError> {
        request.validate()?;
        self.education_repo.create_education(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{education::MockEducationRepository, memory_repo::MemoryRepo};

    #[tokio::test]
    async fn create_rejects_reversed_dates() {
        let handler = EducationHandler::new(MemoryRepo::new());

        let result = handler
            .create_education(NewEducation {
                institution: "State University".into(),
                degree: "BSc".into(),
                field: "Physics".into(),
                location: None,
                start_date: "2014-09-01T00:00:00Z".parse().unwrap(),
                end_date: Some("2010-05-31T00:00:00Z".parse().unwrap()),
                description: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn store_faults_become_fetch_failures() {
        let mut repo = MockEducationRepository::new();
        repo.expect_get_education()
            .returning(|_| Err(AppError::InternalError("boom".into())));

        let handler = EducationHandler::new(repo);

        let err = handler.get_education("1").await.unwrap_err();
        assert!(matches!(err, AppError::InternalError(ref msg) if msg == "Failed to fetch education"));
    }
}
