//! HTTP client for the upstream Web3Signer.

use crate::config::Config;
use crate::schemas::UpstreamSignRequest;
use axum::http::StatusCode;
use bytes::Bytes;
use std::time::Duration;
use tracing::info;

/// How long to wait for a TCP connect before declaring the signer gone.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the upstream signer's JSON-RPC and liveness endpoints.
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    sign_timeout: Option<Duration>,
    upcheck_timeout: Duration,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> Result<Self, crate::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| crate::Error::Config(format!("HTTP client build failed: {e}")))?;

        let base_url = config.upstream_base().to_string();
        info!(upstream = %base_url, "Upstream client initialized");

        Ok(Self {
            http,
            base_url,
            sign_timeout: config.sign_timeout_secs.map(Duration::from_secs),
            upcheck_timeout: Duration::from_secs(config.upcheck_timeout_secs),
        })
    }

    /// Submit a translated signing request and hand back whatever the signer
    /// answers, status and body untouched. Only transport-level failures
    /// (connect refused, DNS, timeout, truncated body) surface as errors;
    /// an upstream 4xx/5xx is still a successful round trip at this layer.
    pub async fn sign(
        &self,
        request: &UpstreamSignRequest,
    ) -> Result<(StatusCode, Bytes), crate::Error> {
        let mut builder = self.http.post(&self.base_url).json(request);
        if let Some(timeout) = self.sign_timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| crate::Error::UpstreamUnreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| crate::Error::UpstreamUnreachable(e.to_string()))?;

        Ok((status, body))
    }

    /// Probe the signer's own `/upcheck` endpoint. True only for an HTTP 200
    /// inside the probe timeout.
    pub async fn upcheck(&self) -> bool {
        let url = format!("{}/upcheck", self.base_url);
        match self
            .http
            .get(&url)
            .timeout(self.upcheck_timeout)
            .send()
            .await
        {
            Ok(response) => response.status() == StatusCode::OK,
            Err(_) => false,
        }
    }
}
