//! # resync-engine
//!
//! Reacts to a merged Bitbucket pull request by re-running CI for every open
//! pull request that targets the same destination branch. The merged change
//! lands on the destination branch, which silently invalidates the CI results
//! of those still-open PRs; triggering a fresh CircleCI pipeline per source
//! branch restores an up-to-date signal.
//!
//! The flow, driven by [`run_resync`]:
//! 1. parse the webhook payload,
//! 2. validate it is a merged pull request event,
//! 3. project repository/branch coordinates out of it,
//! 4. list open PRs on Bitbucket and keep those targeting the same branch,
//! 5. trigger one CircleCI pipeline per remaining source branch.

pub mod bitbucket;
pub mod circleci;
pub mod config;
pub mod errors;
pub mod event;

use serde_json::Value;
use tracing::{error, info};

use crate::bitbucket::BitbucketClient;
use crate::circleci::CircleCiClient;
use crate::errors::ResyncEngineConfigError;
use crate::event::{RepoDetails, is_merged_pr_event};

pub use crate::config::{BitbucketConfig, CircleCiConfig, ResyncConfig};
pub use crate::errors::{ResyncEngineError, ResyncEngineResult};

const USER_AGENT: &str = "pr-resync/0.1";

/// What a completed resync run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResyncOutcome {
    /// Every matching branch got a fresh pipeline.
    Completed { triggered: Vec<String> },
    /// Some triggers failed; the rest went through.
    Partial {
        triggered: Vec<String>,
        failed: Vec<String>,
    },
    /// No open PR targets the merged-into branch, nothing to do.
    NoOpenPrs,
}

/// Runs the full resync flow for one webhook delivery.
///
/// `payload` is the raw request body as received. Validation failures come
/// back as [`ResyncEngineError::MalformedPayload`] or
/// [`ResyncEngineError::Validation`]; downstream failures as
/// [`ResyncEngineError::Provider`].
pub async fn run_resync(
    config: &ResyncConfig,
    payload: &[u8],
) -> ResyncEngineResult<ResyncOutcome> {
    let event: Value = serde_json::from_slice(payload)?;

    if !is_merged_pr_event(&event) {
        return Err(ResyncEngineError::Validation(
            "payload is not a merged pull request event".to_string(),
        ));
    }

    let http = build_http_client(config)?;
    let bitbucket = BitbucketClient::new(http.clone(), config.bitbucket.clone());
    let circleci = CircleCiClient::new(http, config.circleci.clone());

    let details = RepoDetails::from_event(&event).ok_or_else(|| {
        ResyncEngineError::Validation(
            "event is missing repository or destination branch fields".to_string(),
        )
    })?;

    info!(
        destination = %details.destination_branch,
        repository = %details.repository_uuid,
        "resync started for merged pull request"
    );

    let branches = match bitbucket.fetch_open_pr_branches(&details).await {
        Ok(branches) => branches,
        Err(e) => {
            error!(error = %e, "failed to list open pull requests on bitbucket");
            return Err(e);
        }
    };

    if branches.is_empty() {
        info!(
            destination = %details.destination_branch,
            "no open pull requests target the merged-into branch"
        );
        return Ok(ResyncOutcome::NoOpenPrs);
    }

    let mut triggered = Vec::new();
    let mut failed = Vec::new();

    for branch in branches {
        match circleci.trigger_pipeline(&branch).await {
            Ok(()) => {
                info!(%branch, "triggered fresh pipeline");
                triggered.push(branch);
            }
            Err(e) => {
                error!(%branch, error = %e, "failed to trigger pipeline");
                failed.push(branch);
            }
        }
    }

    if failed.is_empty() {
        Ok(ResyncOutcome::Completed { triggered })
    } else {
        Ok(ResyncOutcome::Partial { triggered, failed })
    }
}

fn build_http_client(config: &ResyncConfig) -> ResyncEngineResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.http_timeout)
        .build()
        .map_err(|e| ResyncEngineConfigError::HttpClient(e.to_string()).into())
}
