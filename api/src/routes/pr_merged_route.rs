use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode};
use resync_engine::{ResyncEngineError, ResyncOutcome, run_resync};
use tracing::{error, info, instrument, warn};

use crate::core::app_state::AppState;

/// POST /webhooks/bitbucket/pr-merged
///
/// Receives the Bitbucket `pullrequest:fulfilled` webhook and re-runs CI for
/// every open PR that targets the merged-into branch. Responses carry no body;
/// the status code is the whole contract:
/// 200 all pipelines triggered, 204 nothing to do, 400 unusable payload,
/// 500 downstream failure (including partially failed triggers).
#[instrument(name = "pr_merged_route", skip(state, body))]
pub async fn pr_merged_route(State(state): State<Arc<AppState>>, body: Bytes) -> StatusCode {
    match run_resync(&state.config, &body).await {
        Ok(ResyncOutcome::Completed { triggered }) => {
            info!(count = triggered.len(), "resync completed");
            StatusCode::OK
        }
        Ok(ResyncOutcome::NoOpenPrs) => StatusCode::NO_CONTENT,
        Ok(ResyncOutcome::Partial { triggered, failed }) => {
            error!(
                triggered = triggered.len(),
                failed = failed.len(),
                "resync completed with failed triggers"
            );
            StatusCode::INTERNAL_SERVER_ERROR
        }
        Err(e @ (ResyncEngineError::MalformedPayload(_) | ResyncEngineError::Validation(_))) => {
            warn!(error = %e, "rejected webhook payload");
            StatusCode::BAD_REQUEST
        }
        Err(e) => {
            error!(error = %e, "resync failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
