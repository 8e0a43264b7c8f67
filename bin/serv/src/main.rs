use axum::{Router, middleware, routing::get};
use kana_api::{config::ApiConfig, state::ApiState};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables (and `.env` if present)
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    kana_api::tracing::init_tracing(&config.environment);
    tracing::info!(?config, "Configuration loaded");

    let metrics_handle = kana_api::metrics::init_metrics()?;

    let pool = kana_db::create_pool(&config.database_url, config.db_max_connections).await?;
    kana_db::ensure_db_and_migrate(&config.database_url, &pool).await?;
    tracing::info!("Database connected and migrated");

    let state = ApiState::new(&config, pool)?;

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let metrics_app = Router::new()
        .route("/metrics", get(kana_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = kana_api::router::router()
        .merge(metrics_app)
        .with_state(state.clone())
        .layer(trace_layer)
        .layer(middleware::from_fn(kana_api::metrics::track_metrics))
        .layer(middleware::from_fn(
            kana_api::middleware::request_id::request_id_middleware,
        ));

    let app = kana_api::middleware::security_headers::apply_security_headers(
        app,
        config.environment,
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Server running on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.shutdown().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
