use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::skill::SkillFilter, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_skills(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<impl Responder, AppError> {
    let filter = SkillFilter::from_query(&query);
    let skills = state.skill_handler
        .list_skills(&filter)
        .await?;

    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(state))]
pub async fn get_skill_by_id(
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.get_skill(&skill_id).await?;
    Ok(HttpResponse::Ok().json(skill))
}
