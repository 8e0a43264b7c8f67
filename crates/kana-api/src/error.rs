use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure a handler can return.
///
/// Client errors carry their user-facing message. Server errors carry a
/// short description plus the underlying cause, which is echoed in the
/// `error` field of the response body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{message}: {source}")]
    Database {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: BoxError,
    },
    #[error("{message}: {source}")]
    Internal {
        message: &'static str,
        #[source]
        source: BoxError,
    },
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ApiError {
    /// Adapter for `map_err` on store calls.
    pub fn database(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Database { message, source }
    }

    /// Adapter for `map_err` on calls to the dictionary service.
    pub fn upstream<E>(message: &'static str) -> impl FnOnce(E) -> Self
    where
        E: Into<BoxError>,
    {
        move |source| Self::Upstream {
            message,
            source: source.into(),
        }
    }

    pub fn internal<E>(message: &'static str) -> impl FnOnce(E) -> Self
    where
        E: Into<BoxError>,
    {
        move |source| Self::Internal {
            message,
            source: source.into(),
        }
    }

    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database { .. } | Self::Upstream { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// Undecodable bodies, wrong field types and a missing JSON content type all
// surface as a 400 with the usual body.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            Self::Validation(message)
            | Self::Conflict(message)
            | Self::Auth(message)
            | Self::Forbidden(message)
            | Self::NotFound(message) => ErrorBody {
                message,
                error: None,
            },
            Self::Database { message, source } => {
                tracing::error!(error = %source, "{message}");
                ErrorBody {
                    message,
                    error: Some(source.to_string()),
                }
            }
            Self::Upstream { message, source } | Self::Internal { message, source } => {
                tracing::error!(error = %source, "{message}");
                ErrorBody {
                    message,
                    error: Some(source.to_string()),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
