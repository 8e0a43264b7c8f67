use axum::{Json, Router, extract::State, routing::get};

use super::client::{WordOfTheDay, fetch_word_of_the_day};
use crate::{ApiState, error::ApiError};

/// Public route proxying the dictionary lookup
pub fn routes() -> Router<ApiState> {
    Router::new().route("/api/random-word", get(random_word))
}

async fn random_word(State(state): State<ApiState>) -> Result<Json<WordOfTheDay>, ApiError> {
    let word = fetch_word_of_the_day(&state.word_lookup).await?;
    Ok(Json(word))
}
