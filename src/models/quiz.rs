// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::question::Question;

/// Request body for one quiz round.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PlayPayload {
    /// Ids already served this round; the selector avoids repeating them.
    pub previous_questions: Option<Vec<i64>>,

    /// Category filter. Absent means every category is eligible.
    pub quiz_category: Option<QuizCategory>,
}

/// Category descriptor sent by the quiz client.
/// A `type` of "click" is the client's all-categories sentinel.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    pub id: Option<i64>,

    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlayResponse {
    pub success: bool,
    pub question: Question,
}
