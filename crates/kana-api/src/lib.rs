pub mod auth;
pub mod config;
pub mod error;
pub mod flashcard;
pub mod metrics;
pub mod middleware;
pub mod quiz;
pub mod router;
pub mod state;
pub mod tracing;
pub mod validation;
pub mod word;

pub use config::ApiConfig;
pub use state::{ApiState, AuthConfig, WordLookupConfig};
