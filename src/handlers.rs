//! HTTP request handlers.

use crate::schemas::SignRequest;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::{info, warn};

/// Translate a signing request and relay the signer's answer verbatim.
pub async fn sign(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, crate::Error> {
    let request: SignRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Rejecting malformed sign request");
        crate::Error::MalformedRequest
    })?;

    // Validate the inbound shape fully before spending a round trip.
    let upstream_request = request.translate().inspect_err(|_| {
        warn!(method = %request.method, id = request.id, "Sign request without input payload");
    })?;

    info!(method = %request.method, id = request.id, "Relaying sign request");

    let (status, response_body) = state.upstream.sign(&upstream_request).await.map_err(|e| {
        warn!(error = %e, "Upstream signer unreachable");
        e
    })?;

    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response_body,
    )
        .into_response())
}

/// Liveness probe, answered from the signer's own `/upcheck`.
pub async fn healthz(State(state): State<Arc<AppState>>) -> Result<Response, crate::Error> {
    if state.upstream.upcheck().await {
        Ok((StatusCode::OK, "ok").into_response())
    } else {
        Err(crate::Error::UpstreamUnhealthy)
    }
}
