// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request: malformed or incomplete request body
    BadRequest,

    // 404 Not Found: a lookup that expected at least one row found none
    NotFound,

    // 405 Method Not Allowed: known route, wrong HTTP method
    MethodNotAllowed,

    // 422 Unprocessable: a mutation was rejected by the persistence layer
    Unprocessable,

    // 500 Internal Server Error
    InternalServerError(String),
}

/// Uniform envelope returned for every handled failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into the JSON envelope with the matching status code.
/// The client keys off the fixed message strings, so they never vary.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest => (StatusCode::BAD_REQUEST, "bad request"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "resource not found"),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "not allowed"),
            AppError::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable"),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        let body = Json(ErrorBody {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        });

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` on read-path queries; mutation paths map their
/// errors to `Unprocessable` at the call site instead.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(_: serde_json::Error) -> Self {
        AppError::BadRequest
    }
}
