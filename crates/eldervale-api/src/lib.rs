//! Eldervale narrator HTTP server.
//!
//! Each voice connection opens one session here and forwards the player's
//! finalized utterances, one per request; the response carries the
//! narration to synthesize.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

/// Builds the full application router.
pub fn build_router(app_state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/sessions", routes::session::router())
        .with_state(app_state)
}
