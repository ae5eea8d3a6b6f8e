use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::skill::{NewSkill, Skill, SkillCategory},
    errors::AppError,
    repositories::memory_repo::MemoryRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn get_skill(&self, id: i32) -> Result<Option<Skill>, AppError>;

    /// All skills in insertion order
    async fn get_all_skills(&self) -> Result<Vec<Skill>, AppError>;

    /// Skills whose category wire name equals `category` exactly.
    /// An unknown category yields an empty list.
    async fn get_skills_by_category(&self, category: &str) -> Result<Vec<Skill>, AppError>;

    async fn create_skill(&self, skill: NewSkill) -> Result<Skill, AppError>;
}

#[async_trait]
impl SkillRepository for MemoryRepo {
    async fn get_skill(&self, id: i32) -> Result<Option<Skill>, AppError> {
        Ok(self.skills().read().get(id))
    }

    async fn get_all_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.skills().read().all())
    }

    async fn get_skills_by_category(&self, category: &str) -> Result<Vec<Skill>, AppError> {
        let Ok(category) = category.parse::<SkillCategory>() else {
            return Ok(Vec::new());
        };

        let skills = self.get_all_skills().await?;
        Ok(skills.into_iter().filter(|s| s.category == category).collect())
    }

    async fn create_skill(&self, skill: NewSkill) -> Result<Skill, AppError> {
        let now = Utc::now();
        Ok(self.skills().write().insert_with(|id| skill.prepare_for_insert(id, now)))
    }
}
