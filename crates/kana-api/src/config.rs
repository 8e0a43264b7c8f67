use serde::Deserialize;
use thiserror::Error;

/// Shortest accepted JWT signing secret, in bytes.
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Deployment environment, read from `ENVIRONMENT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid environment configuration: {0}")]
    Env(#[from] envy::Error),
    #[error("JWT_SECRET must be at least {MIN_JWT_SECRET_LEN} bytes long")]
    WeakJwtSecret,
    #[error("BCRYPT_COST must be between 4 and 31, got {0}")]
    BcryptCost(u32),
    #[error("JWT_EXPIRY_HOURS must be positive, got {0}")]
    JwtExpiry(i64),
}

/// Server configuration, one field per environment variable
/// (`database_url` is read from `DATABASE_URL`, and so on).
///
/// Secrets have no defaults: `DATABASE_URL` and `JWT_SECRET` must be set.
#[derive(Clone, Deserialize)]
pub struct ApiConfig {
    pub database_url: String,
    pub jwt_secret: String,
    #[serde(default = "default_jwt_expiry_hours")]
    pub jwt_expiry_hours: i64,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
    #[serde(default = "default_word_lookup_url")]
    pub word_lookup_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub environment: Environment,
}

const fn default_jwt_expiry_hours() -> i64 {
    1
}

const fn default_bcrypt_cost() -> u32 {
    10
}

const fn default_db_max_connections() -> u32 {
    10
}

fn default_word_lookup_url() -> String {
    "https://jisho.org/api/v1/search/words".to_string()
}

const fn default_port() -> u16 {
    3200
}

impl ApiConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Read the configuration from explicit `(NAME, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::from_iter(vars)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::WeakJwtSecret);
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::BcryptCost(self.bcrypt_cost));
        }
        if self.jwt_expiry_hours <= 0 {
            return Err(ConfigError::JwtExpiry(self.jwt_expiry_hours));
        }
        Ok(())
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("database_url", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("db_max_connections", &self.db_max_connections)
            .field("word_lookup_url", &self.word_lookup_url)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .finish()
    }
}
