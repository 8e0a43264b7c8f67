use std::fmt;

use kana_db::models::User;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/register`
///
/// Fields are optional so that a missing field becomes a 400 from the
/// handler instead of a body rejection.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /api/login`; at least one identifier is required.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}

const REDACTED: &str = "<redacted>";

fn redact(password: Option<&String>) -> Option<&'static str> {
    password.map(|_| REDACTED)
}

// Request bodies are logged; the password never is.
impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &redact(self.password.as_ref()))
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &redact(self.password.as_ref()))
            .finish()
    }
}
