//! Industry handlers: list, create, delete, associate a company.

use crate::error::AppError;
use crate::response::{deleted, success_created, success_ok};
use crate::service::IndustryService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewIndustry {
    pub code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Association {
    pub comp_code: Option<String>,
}

/// GET /industries
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let industries = IndustryService::list(&state.pool).await?;
    Ok(success_ok("industries", industries))
}

/// POST /industries
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewIndustry>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let industry =
        IndustryService::create(&state.pool, body.code.as_deref(), body.name.as_deref()).await?;
    tracing::info!(code = %industry.code, "industry created");
    Ok(success_created("industry", industry))
}

/// DELETE /industries/:code
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(code) = path?;
    if IndustryService::delete(&state.pool, &code).await? == 0 {
        return Err(AppError::not_found("Error deleting resource"));
    }
    tracing::info!(code = %code, "industry deleted");
    Ok(deleted())
}

/// POST /industries/:ind_code/companies
pub async fn associate(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Association>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(ind_code) = path?;
    let Json(body) = body?;
    let industry = IndustryService::associate(&state.pool, &ind_code, body.comp_code.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found(format!("No resource found for code: {}", ind_code)))?;
    Ok(success_created("industry", industry))
}
