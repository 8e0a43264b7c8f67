use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

use super::jwt::{Claims, verify_jwt_token};
use crate::{error::ApiError, state::AuthConfig};

/// Authenticated user extractor
///
/// Taking `AuthUser` as a handler argument is what makes a route require a
/// bearer token; routes without it are public.
///
/// - no `Authorization: Bearer <token>` header: 403
/// - token malformed, expired or badly signed: 401
///
/// # Example
/// ```
/// use axum::Json;
/// use kana_api::auth::{AuthUser, jwt::Claims};
///
/// async fn whoami(auth_user: AuthUser) -> Json<Claims> {
///     Json(auth_user.claims)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_config = AuthConfig::from_ref(state);

        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ApiError::Forbidden("No token provided".to_string()))?;

        let claims = verify_jwt_token(token, &auth_config.jwt_secret)?;

        Ok(Self { claims })
    }
}

/// The token part of an `Authorization: Bearer <token>` header, if any.
///
/// The scheme name is matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let (scheme, token) = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_once(' ')?;

    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
