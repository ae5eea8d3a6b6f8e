use validator::Validate;

use crate::{
    entities::project::{NewProject, Project},
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::valid_id::valid_id,
};

const NOT_FOUND: &str = "Project not found";

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists all projects, or only the featured ones
    pub async fn list_projects(&self, featured_only: bool) -> Result<Vec<Project>, AppError> {
        let projects = if featured_only {
            self.project_repo.get_featured_projects().await
        } else {
            self.project_repo.get_all_projects().await
        };

        projects.map_err(|e| AppError::fetch_failed("projects", e))
    }

    pub async fn get_project(&self, project_id: &str) -> Result<Project, AppError> {
        let id = valid_id(project_id, NOT_FOUND)?;

        self.project_repo.get_project(id).await
            .map_err(|e| AppError::fetch_failed("project", e))?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn create_project(&self, request: NewProject) -> Result<Project, AppError> {
        request.validate()?;
        self.project_repo.create_project(request).await
    }
}
