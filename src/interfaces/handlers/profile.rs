use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

/// The portfolio owner's profile, or `null` when none is stored
#[instrument(skip(state))]
pub async fn get_profile(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let profile = state.profile_handler.get_primary_profile().await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(state))]
pub async fn get_profile_by_id(
    profile_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let profile = state.profile_handler.get_profile(&profile_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}
