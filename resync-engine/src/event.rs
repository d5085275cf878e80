//! Webhook event validation and projection.
//!
//! Bitbucket delivers the `pullrequest:fulfilled` event as a JSON document.
//! [`is_merged_pr_event`] decides whether a payload is actionable at all and
//! [`RepoDetails`] projects out the handful of fields the resync needs.

use serde_json::Value;

/// Returns `true` when the payload is a merged pull request event.
///
/// Anything that is not a JSON object, lacks a `pullrequest` object, or whose
/// pull request is not `type == "pullrequest"` with `state == "MERGED"` is
/// rejected.
pub fn is_merged_pr_event(event: &Value) -> bool {
    if !event.is_object() {
        return false;
    }

    let Some(pr) = event.get("pullrequest") else {
        return false;
    };

    pr.get("type").and_then(Value::as_str) == Some("pullrequest")
        && pr.get("state").and_then(Value::as_str) == Some("MERGED")
}

/// Coordinates of the repository and branch the merged PR landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDetails {
    /// Workspace UUID, braces included as Bitbucket sends them.
    pub workspace_uuid: String,
    /// Repository UUID, braces included.
    pub repository_uuid: String,
    /// Branch the merged PR was targeting.
    pub destination_branch: String,
}

impl RepoDetails {
    /// Projects the repository/branch coordinates out of an event payload.
    ///
    /// Returns `None` when any of the required fields is missing or not a
    /// string, leaving the caller to decide how to report that.
    pub fn from_event(event: &Value) -> Option<Self> {
        let repository = event.get("repository")?;

        let workspace_uuid = repository
            .get("workspace")?
            .get("uuid")?
            .as_str()?
            .to_string();
        let repository_uuid = repository.get("uuid")?.as_str()?.to_string();
        let destination_branch = event
            .get("pullrequest")?
            .get("destination")?
            .get("branch")?
            .get("name")?
            .as_str()?
            .to_string();

        Some(Self {
            workspace_uuid,
            repository_uuid,
            destination_branch,
        })
    }
}
