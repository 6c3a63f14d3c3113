//! # error
//!
//! Centralised application error type.
//!
//! Every handler returns `Result<_, AppError>`.  Axum's `IntoResponse` impl
//! converts these into the same `{ "success": false, "error": ... }` envelope
//! the successful responses use, so the client only ever has one shape to
//! unwrap.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required query parameter is missing or malformed.
    #[error("{0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("{0}")]
    NotFound(String),

    /// An upstream API answered non-2xx, timed out, or returned a body we
    /// could not parse.
    #[error("{0}")]
    Upstream(String),

    /// Catch-all for unexpected failures.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_)   => StatusCode::NOT_FOUND,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ApiResponse::<()>::failure(self.to_string()));
        (status, body).into_response()
    }
}
