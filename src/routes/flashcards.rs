use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::{parse_body, required, AppError};
use crate::services::flashcards::{self, Flashcard, DEFAULT_CARD_COUNT, MAX_CARD_COUNT};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateFlashcardsRequest {
    topic: Option<String>,
    content: Option<String>,
    num_cards: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GenerateFlashcardsResponse {
    flashcards: Vec<Flashcard>,
    topic: String,
}

pub async fn generate_flashcards(
    State(state): State<AppState>,
    payload: Result<Json<GenerateFlashcardsRequest>, JsonRejection>,
) -> Result<Json<GenerateFlashcardsResponse>, AppError> {
    let payload = parse_body(payload)?;
    let topic = required(payload.topic).ok_or_else(|| AppError::bad_request("Topic is required"))?;
    let num_cards = payload.num_cards.unwrap_or(DEFAULT_CARD_COUNT);
    if num_cards > MAX_CARD_COUNT {
        return Err(AppError::bad_request(format!(
            "num_cards must be at most {MAX_CARD_COUNT}"
        )));
    }

    let flashcards = match required(payload.content) {
        Some(content) => {
            let mut rng = state.request_rng();
            flashcards::cards_from_content(&mut rng, &content, num_cards)
        }
        None => flashcards::cards_for_topic(&topic, num_cards),
    };
    tracing::debug!(%topic, count = flashcards.len(), "flashcards generated");

    Ok(Json(GenerateFlashcardsResponse { flashcards, topic }))
}
