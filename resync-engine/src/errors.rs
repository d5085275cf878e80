//! Crate-wide error hierarchy for resync-engine.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type ResyncEngineResult<T> = Result<T, ResyncEngineError>;

/// Root error type for the resync-engine crate.
#[derive(Debug, Error)]
pub enum ResyncEngineError {
    /// Webhook payload was not valid JSON.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Payload parsed but is not an actionable merged-PR event.
    #[error("validation error: {0}")]
    Validation(String),

    /// Downstream (Bitbucket/CircleCI) related failure.
    #[error(transparent)]
    Provider(#[from] ResyncEngineProviderError),

    /// HTTP client construction problems.
    #[error(transparent)]
    Config(#[from] ResyncEngineConfigError),
}

/// Downstream-specific error used inside the client layer.
#[derive(Debug, Error)]
pub enum ResyncEngineProviderError {
    /// Unauthorized (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,

    /// Forbidden (HTTP 403).
    #[error("forbidden")]
    Forbidden,

    /// Not found (HTTP 404).
    #[error("not found")]
    NotFound,

    /// Rate limited (HTTP 429).
    #[error("rate limited")]
    RateLimited {
        /// Optional `Retry-After` hint in seconds when available.
        retry_after_secs: Option<u64>,
    },

    /// Gateway / server error (HTTP 5xx).
    #[error("server error: status {0}")]
    Server(u16),

    /// Other HTTP status (non-2xx) not covered by specific variants.
    #[error("http status error: status {0}")]
    HttpStatus(u16),

    /// Timeout at transport level.
    #[error("timeout")]
    Timeout,

    /// Network/transport failure without HTTP status (DNS/connect/reset).
    #[error("network error: {0}")]
    Network(String),

    /// Unexpected/invalid shape of a downstream response body.
    #[error("invalid downstream response: {0}")]
    InvalidResponse(String),
}

/// Configuration and setup errors.
#[derive(Debug, Error)]
pub enum ResyncEngineConfigError {
    /// The shared HTTP client could not be built from the configuration.
    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

// ===== Conversions for `?` ergonomics at the crate root =====

impl From<reqwest::Error> for ResyncEngineError {
    fn from(e: reqwest::Error) -> Self {
        ResyncEngineError::Provider(ResyncEngineProviderError::from(e))
    }
}

// ===== Mapping from reqwest::Error into ResyncEngineProviderError =====

impl From<reqwest::Error> for ResyncEngineProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return ResyncEngineProviderError::Timeout;
        }

        if e.is_decode() {
            return ResyncEngineProviderError::InvalidResponse(e.to_string());
        }

        if let Some(status) = e.status() {
            let code = status.as_u16();
            return match code {
                401 => ResyncEngineProviderError::Unauthorized,
                403 => ResyncEngineProviderError::Forbidden,
                404 => ResyncEngineProviderError::NotFound,
                429 => ResyncEngineProviderError::RateLimited {
                    retry_after_secs: None,
                },
                500..=599 => ResyncEngineProviderError::Server(code),
                _ => ResyncEngineProviderError::HttpStatus(code),
            };
        }

        ResyncEngineProviderError::Network(e.to_string())
    }
}
