use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use kana_db::{models::QuizHistoryEntry, repositories::quiz_history as quiz_repo};
use serde::Deserialize;

use crate::{ApiState, auth::AuthUser, error::ApiError};

/// Create the quiz history routes
///
/// Both routes require a bearer token, and both act only on the caller's
/// own entries: the owner is always taken from the token, never the body.
pub fn routes() -> Router<ApiState> {
    Router::new().route(
        "/api/quiz-history",
        get(list_quiz_history).post(record_quiz_result),
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizResultRequest {
    score: Option<i32>,
    total_questions: Option<i32>,
}

async fn record_quiz_result(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    payload: Result<Json<QuizResultRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<QuizHistoryEntry>), ApiError> {
    let Json(payload) = payload?;
    tracing::info!(user_id = %auth_user.claims.user_id, ?payload, "Record quiz result request");

    let (Some(score), Some(total_questions)) = (payload.score, payload.total_questions) else {
        return Err(ApiError::Validation(
            "Score and totalQuestions are required".to_string(),
        ));
    };

    let entry = quiz_repo::create_entry(
        &state.pool,
        auth_user.claims.user_id,
        &auth_user.claims.username,
        score,
        total_questions,
    )
    .await
    .map_err(ApiError::database("Error saving quiz history"))?;

    Ok((StatusCode::CREATED, Json(entry)))
}

async fn list_quiz_history(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<Vec<QuizHistoryEntry>>, ApiError> {
    let history = quiz_repo::list_for_user(&state.pool, auth_user.claims.user_id)
        .await
        .map_err(ApiError::database("Error fetching quiz history"))?;

    Ok(Json(history))
}
