use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use kana_db::{
    models::{Flashcard, NewFlashcard},
    repositories::flashcard as flashcard_repo,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiState, error::ApiError, validation::non_empty};

/// Create the flashcard routes
///
/// Both routes are public.
pub fn routes() -> Router<ApiState> {
    Router::new().route(
        "/api/flashcards",
        get(list_flashcards).post(create_flashcard),
    )
}

#[derive(Debug, Deserialize)]
struct CreateFlashcardRequest {
    character: Option<String>,
    romanji: Option<String>,
    fact: Option<String>,
    word: Option<String>,
}

async fn list_flashcards(State(state): State<ApiState>) -> Result<Json<Vec<Flashcard>>, ApiError> {
    let flashcards = flashcard_repo::list_flashcards(&state.pool)
        .await
        .map_err(ApiError::database("Error fetching flashcards"))?;

    Ok(Json(flashcards))
}

async fn create_flashcard(
    State(state): State<ApiState>,
    payload: Result<Json<CreateFlashcardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Flashcard>), ApiError> {
    let Json(payload) = payload?;
    tracing::info!(?payload, "Create flashcard request");

    let (Some(character), Some(romanji)) = (non_empty(payload.character), non_empty(payload.romanji))
    else {
        return Err(ApiError::Validation(
            "Character and romanji are required".to_string(),
        ));
    };

    // The id is always ours; callers cannot choose it.
    let new_flashcard = NewFlashcard {
        id: Uuid::new_v4(),
        character: &character,
        romanji: &romanji,
        fact: payload.fact.as_deref(),
        word: payload.word.as_deref(),
    };

    let flashcard = flashcard_repo::create_flashcard(&state.pool, &new_flashcard)
        .await
        .map_err(ApiError::database("Error creating flashcard"))?;

    Ok((StatusCode::CREATED, Json(flashcard)))
}
