//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Expected, user-facing failure with an explicit status.
    #[error("{message}")]
    Http { message: String, status: StatusCode },
    #[error("{0}")]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        AppError::Http {
            message: message.into(),
            status,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Http { status, .. } => *status,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::new(rejection.body_text(), rejection.status())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::new(rejection.body_text(), rejection.status())
    }
}

/// Error envelope: `{"error": {"message", "status"}, "message"}`.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: ErrorDetail,
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn new(message: String, status: StatusCode) -> Self {
        ErrorBody {
            error: ErrorDetail {
                message: message.clone(),
                status: status.as_u16(),
            },
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, Json(ErrorBody::new(self.to_string(), status))).into_response()
    }
}
