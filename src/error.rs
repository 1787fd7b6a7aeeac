use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::spellcheck::SpellCheckError;
use crate::store::StoreError;

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Single failure family surfaced by handlers and the auth extractor.
/// Each variant maps to exactly one HTTP status in `into_response`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Incorrect username or password")]
    BadCredentials,
    #[error("Could not validate credentials")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("User not found")]
    UserNotFound,
    #[error("Note not found")]
    NoteNotFound,
    #[error("You do not have permission to {0} this note")]
    Forbidden(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("Spell-check provider failed: {0}")]
    Upstream(String),
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadCredentials | ApiError::InvalidToken | ApiError::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::UserNotFound | ApiError::NoteNotFound => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!("internal error: {detail}");
        }
        let status = self.status();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<SpellCheckError> for ApiError {
    fn from(e: SpellCheckError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}
