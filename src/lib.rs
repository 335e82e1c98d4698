//! # Web3Signer Proxy
//!
//! A minimal adapter proxy for remote p2p block signing. The op-node
//! sequencer sends the payload to sign in `params.input`; Web3Signer
//! expects an `eth_sign` call with the payload as the second positional
//! parameter. This service rewrites the one shape into the other and
//! relays whatever the signer answers, byte for byte.
//!
//! ## Quick Start
//! ```bash
//! WEB3SIGNER_URL=http://signer:9001 cargo run --bin web3signer-proxy
//! ```
//!
//! ## Endpoints
//! - `POST /sign` - Translate and forward a signing request
//! - `GET /healthz` - Liveness probe, relayed to the signer's `/upcheck`

pub mod config;
mod error;
mod handlers;
mod router;
pub mod schemas;
mod state;
pub mod upstream;

pub use config::Config;
pub use error::Error;
pub use router::create as create_router;
pub use state::AppState;
