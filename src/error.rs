//! Error types for the proxy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

/// Proxy error type.
///
/// Upstream application-level errors (a valid HTTP response carrying an
/// error-shaped JSON-RPC body) are not represented here; they are relayed
/// to the caller as-is.
#[derive(Debug)]
pub enum Error {
    /// Inbound body is not valid JSON.
    MalformedRequest,
    /// Inbound request parsed but carries no payload to sign.
    MissingPayloadField,
    /// Transport-level failure reaching the upstream signer.
    UpstreamUnreachable(String),
    /// Liveness probe to the upstream failed or timed out.
    UpstreamUnhealthy,
    /// Startup configuration error.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedRequest => write!(f, "invalid JSON"),
            Error::MissingPayloadField => write!(f, "missing input field"),
            Error::UpstreamUnreachable(msg) => {
                write!(f, "failed to contact web3signer: {msg}")
            }
            Error::UpstreamUnhealthy => write!(f, "unhealthy"),
            Error::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Caller-facing bodies are fixed strings; transport detail stays in
        // the logs.
        let (status, body) = match &self {
            Error::MalformedRequest => (StatusCode::BAD_REQUEST, "invalid JSON"),
            Error::MissingPayloadField => (StatusCode::BAD_REQUEST, "missing input field"),
            Error::UpstreamUnreachable(_) => {
                (StatusCode::BAD_GATEWAY, "failed to contact web3signer")
            }
            Error::UpstreamUnhealthy => (StatusCode::SERVICE_UNAVAILABLE, "unhealthy"),
            Error::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "misconfigured"),
        };
        (status, body).into_response()
    }
}
