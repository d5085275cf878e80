use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

/// GET /health
///
/// Liveness probe; answers without touching any downstream service.
#[instrument(name = "health_route")]
pub async fn health_route() -> Response {
    let response = serde_json::json!({
        "status": "alive",
        "timestamp": chrono::Utc::now(),
        "service": "pr-resync"
    });

    (StatusCode::OK, Json(response)).into_response()
}
