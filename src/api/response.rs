//! Response Codec
//!
//! Success bodies are the bare JSON encoding of the result. Failures use the fixed
//! envelope `{"error": "<message>"}`. Internal reasons are logged, never sent.

use crate::storage::backend::StoreError;
use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

pub const NOT_FOUND: &str = "Not found";
pub const USER_NOT_FOUND: &str = "User not found";
pub const POST_NOT_FOUND: &str = "Post not found";
pub const BAD_REQUEST: &str = "Bad Request";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown route, or a requested/referenced id is absent. Carries the client message.
    #[error("{0}")]
    NotFound(&'static str),

    /// A required field of the decoded entity is empty.
    #[error("required field `{0}` is empty")]
    BadRequest(&'static str),

    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> &'static str {
        match self {
            ApiError::NotFound(message) => *message,
            ApiError::BadRequest(_) => BAD_REQUEST,
            ApiError::Internal(_) => INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(reason) = &self {
            tracing::error!("Internal server error: {}", reason);
        }
        (
            self.status(),
            Json(ErrorBody {
                error: self.client_message(),
            }),
        )
            .into_response()
    }
}

/// 200 with the JSON encoding of `value`. An encoding failure becomes a 500.
pub fn encode<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value)
        .map_err(|e| ApiError::Internal(format!("Failed to encode response: {}", e)))?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
