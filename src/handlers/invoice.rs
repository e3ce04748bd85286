//! Invoice handlers: list, read, create, update (with paid transition), delete.

use crate::error::AppError;
use crate::response::{deleted, success_created, success_ok};
use crate::service::{CompanyService, InvoiceService};
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
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct NewInvoice {
    pub comp_code: Option<String>,
    /// Number or numeric string; validated by the database cast.
    pub amt: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceChanges {
    pub amt: Option<Value>,
    pub paid: Option<bool>,
}

/// Ids that are not integers cannot match any invoice.
fn parse_id(id_str: &str) -> Option<i32> {
    id_str.trim().parse().ok()
}

/// Text form of an amount for the `::double precision` cast. Null/missing stays None.
fn amount_text(amt: Option<&Value>) -> Option<String> {
    match amt? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// GET /invoices
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let invoices = InvoiceService::list(&state.pool).await?;
    Ok(success_ok("invoices", invoices))
}

/// GET /invoices/:id
///
/// The owning company must exist, but only the invoice row is returned.
pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id_str) = path?;
    let not_found = || AppError::not_found(format!("No resource found for id: {}", id_str));
    let id = parse_id(&id_str).ok_or_else(not_found)?;
    let invoice = InvoiceService::find(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;
    CompanyService::find(&state.pool, &invoice.comp_code)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("No resource found for company: {}", invoice.comp_code))
        })?;
    Ok(success_ok("invoice", invoice))
}

/// POST /invoices
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewInvoice>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let amt = amount_text(body.amt.as_ref());
    let invoice =
        InvoiceService::create(&state.pool, body.comp_code.as_deref(), amt.as_deref()).await?;
    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");
    Ok(success_created("invoice", invoice))
}

/// PATCH /invoices/:id
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<InvoiceChanges>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id_str) = path?;
    let Json(body) = body?;
    let not_found = || AppError::not_found(format!("Error updating resource: {}", id_str));
    let id = parse_id(&id_str).ok_or_else(not_found)?;
    let amt = amount_text(body.amt.as_ref());
    let invoice = InvoiceService::update(&state.pool, id, amt.as_deref(), body.paid)
        .await?
        .ok_or_else(not_found)?;
    Ok(success_ok("invoice", invoice))
}

/// DELETE /invoices/:id
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id_str) = path?;
    let not_found = || AppError::not_found("Error deleting resource");
    let id = parse_id(&id_str).ok_or_else(not_found)?;
    if InvoiceService::delete(&state.pool, id).await? == 0 {
        return Err(not_found());
    }
    tracing::info!(id, "invoice deleted");
    Ok(deleted())
}
