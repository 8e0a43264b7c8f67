//! bcrypt hashing, run off the async workers.
//!
//! bcrypt only reads the first 72 bytes of its input, so longer passwords are
//! refused outright instead of being silently truncated.

use crate::error::ApiError;

/// Longest password bcrypt hashes without truncation, in bytes.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash a password with a fresh random salt.
pub async fn hash_password(password: String, cost: u32) -> Result<String, ApiError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ApiError::Validation(format!(
            "Password must be at most {MAX_PASSWORD_BYTES} bytes"
        )));
    }

    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(ApiError::internal("Password hashing task failed"))?
        .map_err(ApiError::internal("Error hashing password"))
}

/// Check a password against a stored bcrypt hash.
///
/// A password too long to have been hashed never matches.
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, ApiError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Ok(false);
    }

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(ApiError::internal("Password verification task failed"))?
        .map_err(ApiError::internal("Error verifying password"))
}
