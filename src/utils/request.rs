// src/utils/request.rs

use axum::{
    Json,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::AppError;

/// `page` query parameter shared by the paginated listing endpoints.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

/// Resolves the requested page, falling back to the first page when the
/// parameter is absent or unparseable.
pub fn page_or_default(query: Result<Query<PageQuery>, QueryRejection>) -> u32 {
    query.map(|Query(params)| params.page.unwrap_or(1)).unwrap_or(1)
}

/// Decodes a JSON request body into `T`.
///
/// A missing body, a non-object, an empty object, or a field of the wrong
/// type all reject with `BadRequest`. Presence of individual fields is the
/// caller's concern, which is why payload DTOs keep every field optional.
pub fn json_body<T: DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(value) = body.map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection);
        AppError::BadRequest
    })?;

    match value.as_object() {
        Some(fields) if !fields.is_empty() => {}
        _ => return Err(AppError::BadRequest),
    }

    Ok(serde_json::from_value(value)?)
}
