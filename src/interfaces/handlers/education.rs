use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_education(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let education = state.education_handler.list_education().await?;
    Ok(HttpResponse::Ok().json(education))
}

#[instrument(skip(state))]
pub async fn get_education_by_id(
    education_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let education = state.education_handler.get_education(&education_id).await?;
    Ok(HttpResponse::Ok().json(education))
}
