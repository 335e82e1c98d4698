//! Application state shared across handlers.

use crate::config::Config;
use crate::upstream::UpstreamClient;

/// Shared application state. Read-only after startup; both handlers are
/// pure functions of (request, state), so no synchronization is needed.
pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Create application state from configuration.
    pub fn new(config: Config) -> Result<Self, crate::Error> {
        config.validate()?;
        Ok(Self {
            upstream: UpstreamClient::new(&config)?,
            config,
        })
    }
}
