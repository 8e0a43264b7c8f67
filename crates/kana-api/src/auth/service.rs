use kana_db::{models::User, repositories::user as user_repo};
use sqlx::PgPool;

use super::password;
use crate::{error::ApiError, metrics::record_auth_event, state::AuthConfig};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Create a user with a bcrypt-hashed password
///
/// Duplicate usernames or emails are rejected before hashing. A concurrent
/// registration that slips past that check is caught by the unique
/// constraints on insert and reported the same way.
pub async fn register_user(
    pool: &PgPool,
    auth: &AuthConfig,
    username: &str,
    email: &str,
    password: String,
) -> Result<User, ApiError> {
    let existing = user_repo::find_by_username_or_email(pool, Some(username), Some(email))
        .await
        .map_err(ApiError::database("Error registering user"))?;

    if existing.is_some() {
        record_auth_event("register", false);
        return Err(ApiError::Conflict(
            "Username or email already exists".to_string(),
        ));
    }

    let password_hash = password::hash_password(password, auth.bcrypt_cost).await?;

    match user_repo::create_user(pool, username, email, &password_hash).await {
        Ok(user) => {
            record_auth_event("register", true);
            tracing::info!(user_id = %user.id, username = %user.username, "User registered");
            Ok(user)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            record_auth_event("register", false);
            Err(ApiError::Conflict(
                "Username or email already exists".to_string(),
            ))
        }
        Err(e) => Err(ApiError::database("Error registering user")(e)),
    }
}

/// Resolve a user by username and/or email and check the password
///
/// Unknown users and wrong passwords produce the same error.
pub async fn authenticate(
    pool: &PgPool,
    username: Option<&str>,
    email: Option<&str>,
    password: String,
) -> Result<User, ApiError> {
    let Some(user) = user_repo::find_by_username_or_email(pool, username, email)
        .await
        .map_err(ApiError::database("Error logging in"))?
    else {
        tracing::info!("Login failed: user not found");
        record_auth_event("login", false);
        return Err(ApiError::Auth(INVALID_CREDENTIALS.to_string()));
    };

    if !password::verify_password(password, user.password_hash.clone()).await? {
        tracing::info!(user_id = %user.id, "Login failed: invalid password");
        record_auth_event("login", false);
        return Err(ApiError::Auth(INVALID_CREDENTIALS.to_string()));
    }

    record_auth_event("login", true);
    Ok(user)
}
