//! Eldervale narrator API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use eldervale_api::config::ServerConfig;
use eldervale_api::error::AppError;
use eldervale_api::state::AppState;
use eldervale_core::clock::SystemClock;
use eldervale_core::turn::TracingTurnSink;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Local overrides are optional.
    let env_file_loaded = dotenvy::from_filename(".env.local").is_ok();

    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!(env_file_loaded, "Starting Eldervale narrator API server");

    let config = ServerConfig::from_env()?;

    let app_state = AppState::new(
        Arc::new(SystemClock),
        Arc::new(TracingTurnSink),
        config.session,
    );

    // TODO: Replace CorsLayer::permissive() with the voice gateway's origin.
    let app = eldervale_api::build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!(
        %addr,
        max_turns = config.session.max_turns(),
        action_log_limit = config.session.action_log_limit(),
        "Listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
