mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils, web};

use repositories::memory_repo::MemoryRepo;
use use_cases::{
    education::EducationHandler, experience::ExperienceHandler, profile::ProfileHandler,
    project::ProjectHandler, skill::SkillHandler,
};

pub struct AppState {
    pub profile_handler: ProfileHandler<MemoryRepo>,
    pub skill_handler: SkillHandler<MemoryRepo>,
    pub project_handler: ProjectHandler<MemoryRepo>,
    pub experience_handler: ExperienceHandler<MemoryRepo>,
    pub education_handler: EducationHandler<MemoryRepo>,
    pub store: MemoryRepo,
}

impl AppState {
    /// Wires every use case to the same store.
    pub fn new(store: MemoryRepo) -> Self {
        AppState {
            profile_handler: ProfileHandler::new(store.clone()),
            skill_handler: SkillHandler::new(store.clone()),
            project_handler: ProjectHandler::new(store.clone()),
            experience_handler: ExperienceHandler::new(store.clone()),
            education_handler: EducationHandler::new(store.clone()),
            store,
        }
    }
}
