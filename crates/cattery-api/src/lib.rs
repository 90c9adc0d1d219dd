//! Cattery API: HTTP surface of the cat registry.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

/// Builds the full application router with tracing and CORS layers.
pub fn app(state: state::AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with an origin allow-list once a
    // browser client exists.
    Router::new()
        .merge(routes::health::router())
        .merge(routes::cats::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
