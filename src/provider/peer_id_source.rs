//! Peer ID data source
//!
//! Reads a base64-encoded Ed25519 seed from the configuration and
//! computes the node's base58 peer identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use super::{Attribute, DataSource, Diagnostic, Schema};
use crate::peer_id::PeerId;

/// Configuration and result model for the peer ID data source
#[derive(Clone, Serialize, Deserialize)]
pub struct PeerIdModel {
    pub ed25519_secret_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base58: Option<String>,
}

impl fmt::Debug for PeerIdModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeerIdModel")
            .field("ed25519_secret_key", &"****")
            .field("base58", &self.base58)
            .finish()
    }
}

/// Derives a libp2p peer ID from an Ed25519 seed
#[derive(Debug, Default)]
pub struct PeerIdDataSource;

impl PeerIdDataSource {
    pub fn new() -> Self {
        Self
    }
}

impl DataSource for PeerIdDataSource {
    fn type_name(&self, provider_type: &str) -> String {
        format!("{provider_type}_peer_id")
    }

    fn schema(&self) -> Schema {
        Schema::new("Peer ID")
            .attribute(
                Attribute::required(
                    "ed25519_secret_key",
                    "Base64 encoded ed25519 secret key (seed)",
                )
                .sensitive(),
            )
            .attribute(Attribute::computed(
                "base58",
                "base58 representation of this Peer ID",
            ))
    }

    fn read(&self, config: &Value) -> Result<Value, Diagnostic> {
        let mut model: PeerIdModel = serde_json::from_value(config.clone())
            .map_err(|e| Diagnostic::new("Invalid configuration", e.to_string()))?;

        let peer_id =
            PeerId::from_seed_base64(&model.ed25519_secret_key).map_err(Diagnostic::from)?;
        model.base58 = Some(peer_id.to_base58());

        trace!(data_source = "peer_id", "read peer ID data source");

        serde_json::to_value(&model)
            .map_err(|e| Diagnostic::new("State encoding", e.to_string()))
    }
}
