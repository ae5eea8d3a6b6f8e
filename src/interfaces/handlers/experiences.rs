use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

/// Work history, most recent first
#[instrument(skip(state))]
pub async fn get_experiences(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let experiences = state.experience_handler.list_experiences().await?;
    Ok(HttpResponse::Ok().json(experiences))
}

#[instrument(skip(state))]
pub async fn get_experience_by_id(
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let experience = state.experience_handler.get_experience(&experience_id).await?;
    Ok(HttpResponse::Ok().json(experience))
}
