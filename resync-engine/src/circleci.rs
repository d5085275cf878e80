//! CircleCI provider (REST v2) for triggering pipelines.
//!
//! Endpoints used (as of 2025):
//!   * POST /api/v2/project/{project_slug}/pipeline
//!
//! The token travels in the `Circle-Token` header, the branch in the JSON
//! body.

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::CircleCiConfig;
use crate::errors::ResyncEngineResult;

/// CircleCI HTTP client wrapper.
#[derive(Debug, Clone)]
pub struct CircleCiClient {
    http: Client,
    config: CircleCiConfig,
}

impl CircleCiClient {
    pub fn new(http: Client, config: CircleCiConfig) -> Self {
        Self { http, config }
    }

    /// Triggers a pipeline for the given branch.
    ///
    /// A non-2xx response counts as a failed trigger.
    pub async fn trigger_pipeline(&self, branch: &str) -> ResyncEngineResult<()> {
        let url = format!(
            "{}/api/v2/project/{}/pipeline",
            self.config.api_url, self.config.project_slug
        );

        debug!(%url, %branch, "circleci: triggering pipeline");

        let payload = TriggerPipeline { branch };

        self.http
            .post(&url)
            .header("Circle-Token", &self.config.api_token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct TriggerPipeline<'a> {
    branch: &'a str,
}
