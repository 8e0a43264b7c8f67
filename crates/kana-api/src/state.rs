use axum::extract::FromRef;
use sqlx::PgPool;

use crate::ApiConfig;

/// Token signing and password hashing settings.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub bcrypt_cost: u32,
}

/// Where the word-of-the-day proxy sends its request.
#[derive(Clone, Debug)]
pub struct WordLookupConfig {
    pub client: reqwest::Client,
    pub base_url: String,
}

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct ApiState {
    pub pool: PgPool,
    pub auth: AuthConfig,
    pub word_lookup: WordLookupConfig,
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: PgPool) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("kana-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            pool,
            auth: AuthConfig {
                jwt_secret: config.jwt_secret.clone(),
                jwt_expiry_hours: config.jwt_expiry_hours,
                bcrypt_cost: config.bcrypt_cost,
            },
            word_lookup: WordLookupConfig {
                client,
                base_url: config.word_lookup_url.clone(),
            },
        })
    }

    /// Close the store pool, waiting for checked-out connections to return.
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}

impl FromRef<ApiState> for AuthConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.auth.clone()
    }
}
