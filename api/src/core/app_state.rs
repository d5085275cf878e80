use resync_engine::ResyncConfig;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Bitbucket and CircleCI access plus the outbound HTTP timeout.
    pub config: ResyncConfig,
}

impl AppState {
    /// Load shared state from environment variables.
    pub fn from_env() -> Self {
        Self {
            config: ResyncConfig::from_env(),
        }
    }
}
