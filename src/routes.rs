// src/routes.rs

use axum::{
    Json, Router,
    http::Method,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    error::{AppError, ErrorBody},
    handlers::{category, question, quiz},
    models::{
        category::{CategoriesResponse, Category, CategoryQuestionsResponse},
        question::{
            CreateQuestionPayload, CreateQuestionResponse, DeleteQuestionResponse, Question,
            QuestionListResponse, SearchPayload, SearchResponse,
        },
        quiz::{PlayPayload, PlayResponse, QuizCategory},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        category::list_categories,
        category::questions_by_category,
        question::list_questions,
        question::create_question,
        question::delete_question,
        question::search_questions,
        quiz::play,
    ),
    components(schemas(
        Category,
        CategoriesResponse,
        CategoryQuestionsResponse,
        Question,
        QuestionListResponse,
        CreateQuestionPayload,
        CreateQuestionResponse,
        DeleteQuestionResponse,
        SearchPayload,
        SearchResponse,
        PlayPayload,
        PlayResponse,
        QuizCategory,
        ErrorBody,
    ))
)]
struct ApiDoc;

/// Assembles the main application router.
///
/// * Declarative route table mapping each endpoint to its handler.
/// * Fallbacks produce the enveloped 404/405 instead of bare statuses.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/categories", get(category::list_categories))
        .route(
            "/categories/{id}/questions",
            get(category::questions_by_category),
        )
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route("/questions/{id}", delete(question::delete_question))
        .route("/search", post(question::search_questions))
        .route("/play", post(quiz::play))
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(unknown_route)
        .method_not_allowed_fallback(wrong_method)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn unknown_route() -> AppError {
    AppError::NotFound
}

async fn wrong_method() -> AppError {
    AppError::MethodNotAllowed
}
