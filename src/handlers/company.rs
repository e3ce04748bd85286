//! Company handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::response::{deleted, success_created, success_ok};
use crate::service::CompanyService;
use crate::slug::slugify;
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

/// Body for POST and PATCH. A client-supplied `code` is ignored; codes come from the name.
#[derive(Debug, Deserialize)]
pub struct CompanyBody {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// GET /companies
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let companies = CompanyService::list(&state.pool).await?;
    Ok(success_ok("companies", companies))
}

/// GET /companies/:code — company with `invoices` and industry names.
pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(code) = path?;
    let company = CompanyService::detail(&state.pool, &code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No resource found for code: {}", code)))?;
    Ok(success_ok("company", company))
}

/// POST /companies
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CompanyBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let name = body.name.as_deref().unwrap_or_default();
    let code = slugify(name);
    if code.is_empty() {
        return Err(AppError::bad_request(
            "Company name must contain at least one letter or digit",
        ));
    }
    let company =
        CompanyService::create(&state.pool, &code, name, body.description.as_deref()).await?;
    tracing::info!(code = %company.code, "company created");
    Ok(success_created("company", company))
}

/// PATCH /companies/:code
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<CompanyBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(code) = path?;
    let Json(body) = body?;
    let company = CompanyService::update(
        &state.pool,
        &code,
        body.name.as_deref(),
        body.description.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::not_found(format!("Error updating resource: {}", code)))?;
    Ok(success_ok("company", company))
}

/// DELETE /companies/:code
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(code) = path?;
    if CompanyService::delete(&state.pool, &code).await? == 0 {
        return Err(AppError::not_found("Error deleting resource"));
    }
    tracing::info!(code = %code, "company deleted");
    Ok(deleted())
}
