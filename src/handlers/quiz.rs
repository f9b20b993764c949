// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use rand::seq::SliceRandom;
use serde_json::Value;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    error::{AppError, ErrorBody},
    models::{
        question::Question,
        quiz::{PlayPayload, PlayResponse},
    },
    utils::request::json_body,
};

/// `quiz_category.type` value the client sends when the player picks "ALL".
const ALL_CATEGORIES: &str = "click";

/// Serves one random question for the quiz, honoring the category filter
/// and the ids the client has already seen this round.
#[utoipa::path(
    post,
    path = "/play",
    request_body = PlayPayload,
    responses(
        (status = 200, description = "One randomly selected question", body = PlayResponse),
        (status = 400, description = "Missing or empty body", body = ErrorBody),
        (status = 422, description = "No eligible question remains", body = ErrorBody)
    )
)]
pub async fn play(
    State(pool): State<SqlitePool>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: PlayPayload = json_body(body)?;
    let previous = payload.previous_questions.unwrap_or_default();

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT id, question, answer, category, difficulty FROM questions");

    match payload.quiz_category {
        None => {
            if !previous.is_empty() {
                builder.push(" WHERE id NOT IN (");
                let mut ids = builder.separated(", ");
                for id in &previous {
                    ids.push_bind(*id);
                }
                ids.push_unseparated(")");
            }
        }
        Some(category) if category.kind.as_deref() == Some(ALL_CATEGORIES) => {
            // The all-categories sentinel does NOT exclude previous_questions,
            // unlike the no-category branch above. Preserved for compatibility
            // with the existing client contract.
        }
        Some(category) => {
            let category_id = category.id.ok_or(AppError::BadRequest)?;

            builder.push(" WHERE category = ");
            builder.push_bind(category_id);

            if !previous.is_empty() {
                builder.push(" AND id NOT IN (");
                let mut ids = builder.separated(", ");
                for id in &previous {
                    ids.push_bind(*id);
                }
                ids.push_unseparated(")");
            }
        }
    }

    let candidates: Vec<Question> = builder.build_query_as().fetch_all(&pool).await?;

    // An exhausted candidate set is a defined failure, never a panic.
    let question = candidates
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or(AppError::Unprocessable)?;

    Ok(Json(PlayResponse {
        success: true,
        question,
    }))
}
