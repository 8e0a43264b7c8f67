use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use serde_json::{Value, json};

use super::{
    jwt,
    middleware::AuthUser,
    models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
    password::MAX_PASSWORD_BYTES,
    service,
};
use crate::{ApiState, error::ApiError, validation::non_empty};

/// Registration, login and the token check route.
///
/// | route              | access |
/// |--------------------|--------|
/// | POST /api/register | public |
/// | POST /api/login    | public |
/// | GET  /api/secured  | bearer |
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/secured", get(secured))
}

async fn register(
    State(state): State<ApiState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let Json(payload) = payload?;
    tracing::info!(?payload, "Register request");

    let (Some(username), Some(email), Some(password)) = (
        non_empty(payload.username),
        non_empty(payload.email),
        non_empty(payload.password),
    ) else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ApiError::Validation(format!(
            "Password must be at most {MAX_PASSWORD_BYTES} bytes"
        )));
    }

    let user = service::register_user(&state.pool, &state.auth, &username, &email, password).await?;

    Ok(Json(RegisterResponse {
        message: "User registered successfully",
        user,
    }))
}

async fn login(
    State(state): State<ApiState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(payload) = payload?;
    tracing::info!(?payload, "Login request");

    let username = non_empty(payload.username);
    let email = non_empty(payload.email);
    if username.is_none() && email.is_none() {
        return Err(ApiError::Validation(
            "Username or email is required".to_string(),
        ));
    }
    let password = non_empty(payload.password)
        .ok_or_else(|| ApiError::Validation("Password is required".to_string()))?;

    let user =
        service::authenticate(&state.pool, username.as_deref(), email.as_deref(), password).await?;

    let token = jwt::generate_jwt_token(
        user.id,
        &user.username,
        &user.email,
        &state.auth.jwt_secret,
        state.auth.jwt_expiry_hours,
    )?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
    }))
}

async fn secured(auth_user: AuthUser) -> Json<Value> {
    Json(json!({
        "message": "Access granted",
        "user": auth_user.claims,
    }))
}
