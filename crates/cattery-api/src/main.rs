//! Cattery API server entry point.

use std::sync::Arc;

use cattery_api::config::Config;
use cattery_api::error::AppError;
use cattery_api::state::AppState;
use cattery_api::{app, telemetry};
use cattery_cats::infrastructure::in_memory_repository::InMemoryCatRepository;
use cattery_core::clock::{Clock, SystemClock};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Read configuration from environment.
    let config = Config::from_env()?;

    telemetry::init_tracing(config.log_format);

    tracing::info!("Starting Cattery API server");

    // Build application state.
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let cat_repository = Arc::new(InMemoryCatRepository::new(Arc::clone(&clock)));
    let app_state = AppState::new(clock, cat_repository);

    // Start server.
    let addr = config.bind_address()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
