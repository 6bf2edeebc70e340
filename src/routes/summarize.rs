use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::{parse_body, required, AppError};
use crate::services::summarizer;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    summary: String,
    original_length: usize,
    summary_length: usize,
}

pub async fn summarize(
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let payload = parse_body(payload)?;
    let text = required(payload.text).ok_or_else(|| AppError::bad_request("Text is required"))?;

    let summary = summarizer::summarize(&text);
    let response = SummarizeResponse {
        original_length: text.chars().count(),
        summary_length: summary.chars().count(),
        summary,
    };
    tracing::debug!(
        original = response.original_length,
        summary = response.summary_length,
        "text summarized"
    );

    Ok(Json(response))
}
