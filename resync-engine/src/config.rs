//! Configuration for the resync engine.
//!
//! Everything the engine needs to talk to Bitbucket and CircleCI is carried
//! by [`ResyncConfig`]; callers construct it explicitly (typically via
//! [`ResyncConfig::from_env`]) and hand it to [`crate::run_resync`].

use std::env;
use std::time::Duration;

/// Timeout applied to every outbound HTTP request.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Full configuration for one resync run.
#[derive(Debug, Clone)]
pub struct ResyncConfig {
    pub bitbucket: BitbucketConfig,
    pub circleci: CircleCiConfig,
    pub http_timeout: Duration,
}

/// Bitbucket Cloud REST API access.
#[derive(Debug, Clone)]
pub struct BitbucketConfig {
    /// Base URL of the Bitbucket API, e.g. `https://api.bitbucket.org/2.0`.
    pub api_url: String,
    /// Username for basic auth.
    pub username: String,
    /// App password paired with the username.
    pub app_password: String,
}

/// CircleCI v2 API access.
#[derive(Debug, Clone)]
pub struct CircleCiConfig {
    /// Base URL of the CircleCI API, e.g. `https://circleci.com`.
    pub api_url: String,
    /// Project slug in `vcs/org/repo` form.
    pub project_slug: String,
    /// Personal or project API token sent as `Circle-Token`.
    pub api_token: String,
}

impl ResyncConfig {
    /// Builds the configuration from environment variables.
    ///
    /// Missing credentials are left empty rather than rejected here; the
    /// downstream APIs answer 401 and that surfaces through the provider
    /// error mapping.
    pub fn from_env() -> Self {
        Self {
            bitbucket: BitbucketConfig {
                api_url: env::var("BITBUCKET_API_URL")
                    .unwrap_or_else(|_| "https://api.bitbucket.org/2.0".to_string()),
                username: env::var("BITBUCKET_USERNAME").unwrap_or_default(),
                app_password: env::var("BITBUCKET_APP_PASSWORD").unwrap_or_default(),
            },
            circleci: CircleCiConfig {
                api_url: env::var("CIRCLECI_API_URL")
                    .unwrap_or_else(|_| "https://circleci.com".to_string()),
                project_slug: env::var("CIRCLECI_PROJECT_SLUG").unwrap_or_default(),
                api_token: env::var("CIRCLECI_API_TOKEN").unwrap_or_default(),
            },
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}
