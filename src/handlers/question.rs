// src/handlers/question.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{
    error::{AppError, ErrorBody},
    handlers::category::category_map,
    models::question::{
        CreateQuestionPayload, CreateQuestionResponse, DeleteQuestionResponse, Question,
        QuestionListResponse, SearchPayload, SearchResponse,
    },
    utils::{
        pagination::paginate,
        request::{PageQuery, json_body, page_or_default},
    },
};

/// Fetches every question ordered by id. Pagination happens in memory on
/// the full set, which also supplies the page-relative fields below.
pub(crate) async fn fetch_all_questions(pool: &SqlitePool) -> Result<Vec<Question>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

pub(crate) async fn count_questions(pool: &SqlitePool) -> Result<i64, AppError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;

    Ok(total)
}

/// Lists all questions, paginated 10 per page.
#[utoipa::path(
    get,
    path = "/questions",
    params(
        ("page" = Option<u32>, Query, description = "1-indexed page of 10 questions")
    ),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 404, description = "Page is out of range or no questions exist", body = ErrorBody)
    )
)]
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let page = page_or_default(page);

    let questions = fetch_all_questions(&pool).await?;
    let current = paginate(&questions, page);

    if current.is_empty() {
        return Err(AppError::NotFound);
    }

    // currentCategory carries the ids of the questions on this page, not
    // category ids. Preserved for compatibility with the existing client.
    let current_category = current.iter().map(|question| question.id).collect();

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: count_questions(&pool).await?,
        categories: category_map(&pool).await?,
        questions: current,
        current_category,
    }))
}

/// Creates a new question from the submitted form.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question created; first page refreshed", body = CreateQuestionResponse),
        (status = 400, description = "Missing body or required field", body = ErrorBody),
        (status = 422, description = "Insert rejected by the store", body = ErrorBody)
    )
)]
pub async fn create_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateQuestionPayload = json_body(body)?;

    // Each field rejects independently; the envelope carries no
    // field-specific message.
    let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
        payload.question,
        payload.answer,
        payload.category,
        payload.difficulty,
    ) else {
        return Err(AppError::BadRequest);
    };

    let created = sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) \
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&question)
    .bind(&answer)
    .bind(category)
    .bind(difficulty)
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert question: {:?}", e);
        AppError::Unprocessable
    })?
    .last_insert_rowid();

    let questions = fetch_all_questions(&pool).await?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        questions: paginate(&questions, 1),
        total_questions: count_questions(&pool).await?,
        created,
    }))
}

/// Deletes a question by id and returns the refreshed first page.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted; first page refreshed", body = DeleteQuestionResponse),
        (status = 404, description = "No question with this id", body = ErrorBody),
        (status = 422, description = "Delete rejected by the store", body = ErrorBody)
    )
)]
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A non-integer id is indistinguishable from an unknown question.
    let Path(id) = id.map_err(|_| AppError::NotFound)?;

    let existing = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?;

    if existing.is_none() {
        return Err(AppError::NotFound);
    }

    sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::Unprocessable
        })?;

    let questions = fetch_all_questions(&pool).await?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        questions: paginate(&questions, 1),
        total_questions: count_questions(&pool).await?,
    }))
}

/// Searches question text for a case-insensitive substring.
#[utoipa::path(
    post,
    path = "/search",
    request_body = SearchPayload,
    responses(
        (status = 200, description = "All matching questions, unpaginated", body = SearchResponse),
        (status = 400, description = "Missing body or search term", body = ErrorBody),
        (status = 404, description = "Nothing matched", body = ErrorBody)
    )
)]
pub async fn search_questions(
    State(pool): State<SqlitePool>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: SearchPayload = json_body(body)?;
    let term = payload.search_term.ok_or(AppError::BadRequest)?;

    // SQLite LIKE is case-insensitive over ASCII, which covers the
    // substring contract here.
    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE question LIKE ?1 ORDER BY id",
    )
    .bind(format!("%{}%", term))
    .fetch_all(&pool)
    .await?;

    if questions.is_empty() {
        return Err(AppError::NotFound);
    }

    let current_category = questions.iter().map(|question| question.category).collect();

    Ok(Json(SearchResponse {
        success: true,
        // Unfiltered count, not the number of matches.
        total_questions: count_questions(&pool).await?,
        questions,
        current_category,
    }))
}
