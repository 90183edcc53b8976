//! Typed API error for HTTP handlers.
//!
//! Every failure leaves the server as `{"error": "...", "details": "..."}`,
//! where `details` only appears on 500s and only when enabled in config.

use std::fmt;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kanban_service::ServiceError;
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: missing field, malformed body, oversized title.
    BadRequest(String),
    /// 404 Not Found: no row matched the path id.
    NotFound(String),
    /// 500 Internal Server Error with a fixed per-route message.
    Internal { message: &'static str, details: Option<String> },
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    /// Log `err` and wrap it as a 500. The failure text is kept only when
    /// `expose` is set.
    pub fn internal<E>(message: &'static str, err: E, expose: bool) -> Self
    where
        E: fmt::Display + fmt::Debug,
    {
        tracing::error!(error = ?err, "{message}");
        Self::Internal { message, details: expose.then(|| err.to_string()) }
    }

    /// Map a service failure: invalid input is the caller's fault, anything
    /// else is reported under `message`.
    pub fn from_service(err: ServiceError, message: &'static str, expose: bool) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::Storage(e) => Self::internal(message, e, expose),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(error) => (StatusCode::BAD_REQUEST, ErrorBody { error, details: None }),
            Self::NotFound(error) => (StatusCode::NOT_FOUND, ErrorBody { error, details: None }),
            Self::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody { error: message.to_owned(), details },
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        Self::BadRequest(rejection.body_text())
    }
}
