use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::models::ResourceKind;

pub type AppResult<T> = Result<T, AppError>;

/// Message returned for every denied request; the reason stays in the logs.
pub const FORBIDDEN_MESSAGE: &str = "forbidden";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("forbidden")]
    Forbidden,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("policy error")]
    Policy(#[from] PolicyError),
}

impl AppError {
    pub fn forbidden() -> Self {
        Self::Forbidden
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Raised while assembling policy tables, never while evaluating them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("policy for {0} defines no actions")]
    EmptyPolicy(ResourceKind),
    #[error("empty clause in {kind}.{action}")]
    EmptyClause {
        kind: ResourceKind,
        action: &'static str,
    },
    #[error("policy for {0} registered twice")]
    DuplicateKind(ResourceKind),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Policy(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            AppError::Forbidden => FORBIDDEN_MESSAGE.to_string(),
            AppError::Policy(err) => {
                tracing::error!(error = %err, "policy table rejected");
                self.to_string()
            }
            _ => self.to_string(),
        };
        let error = match &self {
            AppError::Forbidden => "forbidden",
            AppError::NotFound(_) => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::Configuration(_) => "configuration",
            AppError::Policy(_) => "policy",
        };

        let payload = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(payload)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
