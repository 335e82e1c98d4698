//! Proxy configuration.

use serde::Deserialize;

/// Configuration for the signer proxy.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the upstream Web3Signer. Required: startup fails when
    /// this resolves to an empty string.
    #[serde(default = "defaults::upstream_url")]
    pub upstream_url: String,

    #[serde(default = "defaults::bind_address")]
    pub bind_address: String,

    /// Timeout for the signing call itself, in seconds. Unset means the
    /// transport default applies (signing can legitimately take a while).
    #[serde(default)]
    pub sign_timeout_secs: Option<u64>,

    /// Timeout for the `/upcheck` liveness probe, in seconds.
    #[serde(default = "defaults::upcheck_timeout_secs")]
    pub upcheck_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_url: defaults::upstream_url(),
            bind_address: defaults::bind_address(),
            sign_timeout_secs: None,
            upcheck_timeout_secs: defaults::upcheck_timeout_secs(),
        }
    }
}

impl Config {
    /// Check that the configuration is serviceable. The upstream URL has no
    /// usable default, so an empty one refuses to start the process.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.upstream_url.is_empty() {
            return Err(crate::Error::Config(
                "upstream URL is not set (PROXY_UPSTREAM_URL or WEB3SIGNER_URL)".into(),
            ));
        }
        Ok(())
    }

    /// Upstream base URL without a trailing slash, so probe paths join cleanly.
    pub fn upstream_base(&self) -> &str {
        self.upstream_url.trim_end_matches('/')
    }
}

mod defaults {
    pub fn upstream_url() -> String {
        // Priority: PROXY_UPSTREAM_URL (via the env source) > legacy WEB3SIGNER_URL
        std::env::var("WEB3SIGNER_URL").unwrap_or_default()
    }

    pub fn bind_address() -> String {
        // Legacy deployments configure only the port.
        let port = std::env::var("PORT")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "9000".into());
        format!("0.0.0.0:{port}")
    }

    pub fn upcheck_timeout_secs() -> u64 {
        2
    }
}
