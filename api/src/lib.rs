use std::{env, sync::Arc};

mod core;
mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::routes::{health_route::health_route, pr_merged_route::pr_merged_route};

pub use crate::core::app_state::AppState;
pub use crate::error_handler::AppError;

/// Builds the application router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_route))
        .route("/webhooks/bitbucket/pr-merged", post(pr_merged_route))
        .with_state(state)
}

/// Binds the listener and serves until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let addr = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let state = Arc::new(AppState::from_env());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;

    info!(%addr, "pr-resync api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
