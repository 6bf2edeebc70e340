mod flashcards;
mod health;
mod quiz;
mod study_plan;
mod summarize;
mod tutor;
mod vocabulary;

use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;

use crate::response::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/generate-quiz",
            post(quiz::generate_quiz).fallback(method_not_allowed),
        )
        .route(
            "/summarize",
            post(summarize::summarize).fallback(method_not_allowed),
        )
        .route(
            "/generate-flashcards",
            post(flashcards::generate_flashcards).fallback(method_not_allowed),
        )
        .route(
            "/tutor-chat",
            post(tutor::tutor_chat).fallback(method_not_allowed),
        )
        .route(
            "/generate-study-plan",
            post(study_plan::generate_study_plan).fallback(method_not_allowed),
        )
        .route(
            "/extract-vocabulary",
            post(vocabulary::extract_vocabulary).fallback(method_not_allowed),
        )
        .nest("/health", health::router())
        .fallback(fallback_handler)
        .with_state(state)
}

async fn method_not_allowed() -> Response {
    AppError::method_not_allowed("Method not allowed").into_response()
}

async fn fallback_handler() -> Response {
    AppError::not_found("Endpoint not found").into_response()
}
