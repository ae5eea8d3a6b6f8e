use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::project::{NewProject, Project},
    errors::AppError,
    repositories::memory_repo::MemoryRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn get_project(&self, id: i32) -> Result<Option<Project>, AppError>;

    /// All projects in insertion order
    async fn get_all_projects(&self) -> Result<Vec<Project>, AppError>;

    /// Projects flagged as featured, in insertion order
    async fn get_featured_projects(&self) -> Result<Vec<Project>, AppError>;

    async fn create_project(&self, project: NewProject) -> Result<Project, AppError>;
}

#[async_trait]
impl ProjectRepository for MemoryRepo {
    async fn get_project(&self, id: i32) -> Result<Option<Project>, AppError> {
        Ok(self.projects().read().get(id))
    }

    async fn get_all_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.projects().read().all())
    }

    async fn get_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = self.get_all_projects().await?;
        Ok(projects.into_iter().filter(|p| p.featured).collect())
    }

    async fn create_project(&self, project: NewProject) -> Result<Project, AppError> {
        let now = Utc::now();
        Ok(self.projects().write().insert_with(|id| project.prepare_for_insert(id, now)))
    }
}
