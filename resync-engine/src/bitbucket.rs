//! Bitbucket Cloud provider (REST v2) for listing open pull requests.
//!
//! Endpoints used (as of 2025):
//!   * GET /2.0/repositories/{workspace}/{repo}/pullrequests
//!
//! The list endpoint returns open pull requests by default. Pagination is
//! not followed; one page covers the open PRs of a single repository.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::BitbucketConfig;
use crate::errors::ResyncEngineResult;
use crate::event::RepoDetails;

/// Bitbucket Cloud HTTP client wrapper.
#[derive(Debug, Clone)]
pub struct BitbucketClient {
    http: Client,
    config: BitbucketConfig,
}

impl BitbucketClient {
    pub fn new(http: Client, config: BitbucketConfig) -> Self {
        Self { http, config }
    }

    /// Lists source branches of open PRs targeting the given destination
    /// branch, in API order, duplicates preserved.
    pub async fn fetch_open_pr_branches(
        &self,
        details: &RepoDetails,
    ) -> ResyncEngineResult<Vec<String>> {
        let url = format!(
            "{}/repositories/{}/{}/pullrequests",
            self.config.api_url, details.workspace_uuid, details.repository_uuid
        );

        debug!(%url, "bitbucket: listing open pull requests");

        let page: BitbucketPrPage = self
            .http
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.app_password))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(source_branches_targeting(page, &details.destination_branch))
    }
}

fn source_branches_targeting(page: BitbucketPrPage, destination: &str) -> Vec<String> {
    page.values
        .into_iter()
        .filter(|pr| pr.destination.branch.name == destination)
        .map(|pr| pr.source.branch.name)
        .collect()
}

// ===== Wire DTOs =====

/// Bitbucket PR list response (subset of fields we actually use).
#[derive(Debug, Deserialize)]
struct BitbucketPrPage {
    values: Vec<BitbucketPr>,
}

#[derive(Debug, Deserialize)]
struct BitbucketPr {
    source: BitbucketPrEndpoint,
    destination: BitbucketPrEndpoint,
}

#[derive(Debug, Deserialize)]
struct BitbucketPrEndpoint {
    branch: BitbucketBranch,
}

#[derive(Debug, Deserialize)]
struct BitbucketBranch {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pr(source: &str, destination: &str) -> BitbucketPr {
        BitbucketPr {
            source: BitbucketPrEndpoint {
                branch: BitbucketBranch {
                    name: source.to_string(),
                },
            },
            destination: BitbucketPrEndpoint {
                branch: BitbucketBranch {
                    name: destination.to_string(),
                },
            },
        }
    }

    #[test]
    fn keeps_only_matching_destinations_in_order() {
        let page = BitbucketPrPage {
            values: vec![pr("a", "develop"), pr("b", "main"), pr("c", "develop")],
        };

        let branches = source_branches_targeting(page, "develop");

        assert_eq!(branches, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn preserves_duplicate_source_branches() {
        let page = BitbucketPrPage {
            values: vec![pr("feature/x", "develop"), pr("feature/x", "develop")],
        };

        let branches = source_branches_targeting(page, "develop");

        assert_eq!(
            branches,
            vec!["feature/x".to_string(), "feature/x".to_string()]
        );
    }

    #[test]
    fn yields_empty_when_nothing_targets_the_branch() {
        let page = BitbucketPrPage {
            values: vec![pr("a", "main"), pr("b", "release/1.2")],
        };

        assert!(source_branches_targeting(page, "develop").is_empty());
    }
}
