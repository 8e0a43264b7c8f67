use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::{auth, flashcard, quiz, state::ApiState, word};

/// The full API.
///
/// Access is decided per route by each handler's extractors: only the quiz
/// history routes and `/api/secured` take an `AuthUser`.
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(auth::routes())
        .merge(flashcard::routes())
        .merge(quiz::routes())
        .merge(word::routes())
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
