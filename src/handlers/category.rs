// src/handlers/category.rs

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::{AppError, ErrorBody},
    handlers::question::count_questions,
    models::{
        category::{CategoriesResponse, Category, CategoryQuestionsResponse},
        question::Question,
    },
    utils::{
        pagination::paginate,
        request::{PageQuery, page_or_default},
    },
};

/// Fetches all categories as a `{stringified id -> type}` map, the shape
/// the client consumes everywhere categories appear.
pub(crate) async fn category_map(pool: &SqlitePool) -> Result<BTreeMap<String, String>, AppError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(categories
        .into_iter()
        .map(|category| (category.id.to_string(), category.category_type))
        .collect())
}

/// Lists all available categories.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Map of category id to type", body = CategoriesResponse)
    )
)]
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let categories = category_map(&pool).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// Lists the questions belonging to one category, paginated.
///
/// 404s when the category has no questions at all; a `page` parameter past
/// the end still answers 200 with an empty page, unlike the global listing.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i64, Path, description = "Category id"),
        ("page" = Option<u32>, Query, description = "1-indexed page of 10 questions")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 404, description = "No questions in this category", body = ErrorBody)
    )
)]
pub async fn questions_by_category(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A non-integer id is indistinguishable from an unknown category.
    let Path(category_id) = id.map_err(|_| AppError::NotFound)?;

    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE category = ?1 ORDER BY id",
    )
    .bind(category_id)
    .fetch_all(&pool)
    .await?;

    if questions.is_empty() {
        return Err(AppError::NotFound);
    }

    let page = page_or_default(page);

    // total_questions is the unfiltered grand total, not the per-category
    // count. Preserved for compatibility with the existing client.
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(&questions, page),
        total_questions: count_questions(&pool).await?,
        current_category: category_id,
    }))
}
