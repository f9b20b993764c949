// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Represents the 'questions' table in the database.
/// Rows are inserted and deleted, never updated in place.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub id: i64,

    /// The text content of the question.
    pub question: String,

    /// The accepted answer.
    pub answer: String,

    /// References categories.id.
    pub category: i64,

    /// Difficulty score chosen by the author.
    pub difficulty: i64,
}

/// DTO for creating a new question.
/// Every field stays optional so each missing one rejects independently.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionPayload {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// DTO for the question search endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: BTreeMap<String, String>,
    /// Ids of the questions on this page, not category ids.
    /// Preserved for compatibility with the existing client.
    #[serde(rename = "currentCategory")]
    pub current_category: Vec<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    /// Id of the newly inserted question.
    pub created: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    /// Category of each match, in match order.
    #[serde(rename = "currentCategory")]
    pub current_category: Vec<i64>,
}
