//! Wire schemas for both sides of the proxy, and the translation between them.

use serde::{Deserialize, Serialize};

/// Protocol version tag stamped on every outbound request.
pub const JSONRPC_VERSION: &str = "2.0";
/// The one signing method the upstream understands.
pub const SIGN_METHOD: &str = "eth_sign";

/// Signing request as the op-node p2p client sends it.
///
/// Decoding is deliberately lenient: the sequencer's client has varied its
/// envelope fields across releases, so everything except the payload itself
/// falls back to a zero value. Only `params.input` gates forwarding.
#[derive(Debug, Clone, Deserialize)]
pub struct SignRequest {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: SignParams,
    #[serde(default)]
    pub id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignParams {
    #[serde(default)]
    pub address: String,
    /// Legacy payload field. Accepted for compatibility, never read.
    #[serde(default)]
    pub data: Option<String>,
    /// The payload actually signed. Must be non-empty.
    #[serde(default)]
    pub input: Option<String>,
}

/// `eth_sign` call in the form Web3Signer expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamSignRequest {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: (String, String),
    pub id: i64,
}

impl SignRequest {
    /// Rewrite into the upstream wire format.
    ///
    /// The inbound method and version tag are informational only; the
    /// outbound call always carries the fixed `eth_sign`/`"2.0"` pair. The
    /// correlation id passes through unchanged.
    pub fn translate(&self) -> Result<UpstreamSignRequest, crate::Error> {
        let input = match self.params.input.as_deref() {
            Some(input) if !input.is_empty() => input,
            _ => return Err(crate::Error::MissingPayloadField),
        };

        Ok(UpstreamSignRequest {
            jsonrpc: JSONRPC_VERSION,
            method: SIGN_METHOD,
            params: (self.params.address.clone(), input.to_string()),
            id: self.id,
        })
    }
}
