use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::{parse_body, required, AppError};
use crate::services::vocabulary::{self, VocabularyEntry, VocabularyLevel};

#[derive(Debug, Deserialize)]
pub struct ExtractVocabularyRequest {
    text: Option<String>,
    difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractVocabularyResponse {
    vocabulary: Vec<VocabularyEntry>,
    total_words: usize,
}

pub async fn extract_vocabulary(
    payload: Result<Json<ExtractVocabularyRequest>, JsonRejection>,
) -> Result<Json<ExtractVocabularyResponse>, AppError> {
    let payload = parse_body(payload)?;
    let text = required(payload.text).ok_or_else(|| AppError::bad_request("Text is required"))?;
    let level = payload
        .difficulty
        .and_then(|d| d.parse().ok())
        .unwrap_or(VocabularyLevel::All);

    let vocabulary = vocabulary::extract_vocabulary(&text, level);
    tracing::debug!(?level, count = vocabulary.len(), "vocabulary extracted");

    Ok(Json(ExtractVocabularyResponse {
        total_words: vocabulary.len(),
        vocabulary,
    }))
}
