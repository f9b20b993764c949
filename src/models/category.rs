// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::models::question::Question;

/// Represents the 'categories' table in the database.
/// Read-only through the API; rows are provisioned by the database seed.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,

    /// Display name of the category.
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Stringified category id to display name.
    pub categories: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Grand total across all categories, not the filtered count.
    pub total_questions: i64,
    pub current_category: i64,
}
