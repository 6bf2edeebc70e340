use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::{parse_body, required, AppError};
use crate::services::quiz::{
    self, QuizQuestion, DEFAULT_DIFFICULTY, DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    topic: Option<String>,
    difficulty: Option<String>,
    num_questions: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    questions: Vec<QuizQuestion>,
    topic: String,
    difficulty: String,
}

pub async fn generate_quiz(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQuizRequest>, JsonRejection>,
) -> Result<Json<GenerateQuizResponse>, AppError> {
    let payload = parse_body(payload)?;
    let topic = required(payload.topic).ok_or_else(|| AppError::bad_request("Topic is required"))?;
    let difficulty = payload
        .difficulty
        .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string());
    let num_questions = payload.num_questions.unwrap_or(DEFAULT_QUESTION_COUNT);
    if num_questions > MAX_QUESTION_COUNT {
        return Err(AppError::bad_request(format!(
            "num_questions must be at most {MAX_QUESTION_COUNT}"
        )));
    }

    let mut rng = state.request_rng();
    let questions = quiz::generate_quiz(&mut rng, &topic, num_questions);
    tracing::debug!(%topic, %difficulty, count = questions.len(), "quiz generated");

    Ok(Json(GenerateQuizResponse {
        questions,
        topic,
        difficulty,
    }))
}
