use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;
use thiserror::Error;

use crate::modules::quiz::adapters::outbound::progress_store::ProgressStoreError;
use crate::modules::quiz::use_cases::errors::ApplicationError;

pub const USER_NOT_FOUND: &str = "User not found, use /start";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::UnknownUser(_)
            | ApplicationError::Store(ProgressStoreError::UnknownUser(_)) => {
                ApiError::Unauthorized(USER_NOT_FOUND.into())
            }
            ApplicationError::QuestionNotFound(_) => ApiError::NotFound("Question not found".into()),
            ApplicationError::Conflict { .. } => {
                tracing::warn!(error = %err, "giving up on conflicting update");
                ApiError::Conflict("Too many concurrent updates, try again".into())
            }
            ApplicationError::Store(e) => {
                tracing::error!(error = %e, "progress store failure");
                ApiError::Internal
            }
        }
    }
}
