use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::{parse_body, required, AppError};
use crate::services::tutor::QuestionKind;

#[derive(Debug, Deserialize)]
pub struct TutorChatRequest {
    question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TutorChatResponse {
    answer: &'static str,
}

pub async fn tutor_chat(
    payload: Result<Json<TutorChatRequest>, JsonRejection>,
) -> Result<Json<TutorChatResponse>, AppError> {
    let payload = parse_body(payload)?;
    let question =
        required(payload.question).ok_or_else(|| AppError::bad_request("Question is required"))?;

    let kind = QuestionKind::classify(&question);
    tracing::debug!(?kind, "tutor reply selected");

    Ok(Json(TutorChatResponse {
        answer: kind.answer(),
    }))
}
