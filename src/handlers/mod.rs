//! HTTP handlers for companies, invoices and industries.

pub mod company;
pub mod industry;
pub mod invoice;

use crate::error::AppError;

/// Fallback for unknown paths and for methods a path does not serve.
pub async fn not_found() -> AppError {
    AppError::not_found("Not Found")
}
