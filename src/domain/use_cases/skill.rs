use validator::Validate;

use crate::{
    entities::{
        query_params::QueryValue,
        skill::{NewSkill, Skill, SkillFilter},
    },
    errors::AppError,
    repositories::skill::SkillRepository,
    utils::valid_id::valid_id,
};

const NOT_FOUND: &str = "Skill not found";

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    /// Lists skills, narrowed to one category when a non-empty one is given.
    /// A repeated `category` key matches no category, so the list is empty.
    pub async fn list_skills(&self, filter: &SkillFilter) -> Result<Vec<Skill>, AppError> {
        let skills = match &filter.category {
            QueryValue::Absent => self.skill_repo.get_all_skills().await,
            QueryValue::Single(category) if category.is_empty() => {
                self.skill_repo.get_all_skills().await
            }
            QueryValue::Single(category) => self.skill_repo.get_skills_by_category(category).await,
            QueryValue::Repeated(_) => Ok(Vec::new()),
        };

        skills.map_err(|e| AppError::fetch_failed("skills", e))
    }

    pub async fn get_skill(&self, skill_id: &str) -> Result<Skill, AppError> {
        let id = valid_id(skill_id, NOT_FOUND)?;

        self.skill_repo.get_skill(id).await
            .map_err(|e| AppError::fetch_failed("skill", e))?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn create_skill(&self, request: NewSkill) -> Result<Skill, AppError> {
        request.validate()?;
        self.skill_repo.create_skill(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::skill::MockSkillRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn empty_category_lists_everything() {
        let mut repo = MockSkillRepository::new();
        repo.expect_get_all_skills().times(2).returning(|| Ok(Vec::new()));
        repo.expect_get_skills_by_category().never();

        let handler = SkillHandler::new(repo);

        handler.list_skills(&SkillFilter::default()).await.unwrap();
        handler.list_skills(&SkillFilter::by_category("")).await.unwrap();
    }

    #[tokio::test]
    async fn category_is_passed_through_verbatim() {
        let mut repo = MockSkillRepository::new();
        repo.expect_get_skills_by_category()
            .with(eq("Backend"))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let handler = SkillHandler::new(repo);

        assert!(handler.list_skills(&SkillFilter::by_category("Backend")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeated_category_lists_nothing_without_querying() {
        let mut repo = MockSkillRepository::new();
        repo.expect_get_all_skills().never();
        repo.expect_get_skills_by_category().never();

        let handler = SkillHandler::new(repo);
        let filter = SkillFilter {
            category: QueryValue::Repeated(vec!["frontend".into(), "backend".into()]),
        };

        assert!(handler.list_skills(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_faults_become_fetch_failures() {
        let mut repo = MockSkillRepository::new();
        repo.expect_get_all_skills()
            .returning(|| Err(AppError::InternalError("lock poisoned".into())));
        repo.expect_get_skill()
            .returning(|_| Err(AppError::InternalError("lock poisoned".into())));

        let handler = SkillHandler::new(repo);

        assert_eq!(handler.list_skills(&SkillFilter::default()).await.unwrap_err().to_string(), "Failed to fetch skills");
        assert_eq!(handler.get_skill("1").await.unwrap_err().to_string(), "Failed to fetch skill");
    }

    #[tokio::test]
    async fn missing_skill_is_not_found() {
        let mut repo = MockSkillRepository::new();
        repo.expect_get_skill().with(eq(12)).returning(|_| Ok(None));

        let handler = SkillHandler::new(repo);

        let err = handler.get_skill("12").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Skill not found"));
    }
}
