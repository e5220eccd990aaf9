//! Provider Module - host adapter for the peer ID data source
//!
//! The hosting configuration-management system talks to this crate
//! through one small interface: a data source describes its attribute
//! schema, optionally receives provider-level data, and evaluates a
//! configuration object into a result object or a diagnostic. No wire
//! protocol lives here; marshaling is plain JSON values at the seam.

mod schema;
mod peer_id_source;

pub use schema::{Attribute, Schema};
pub use peer_id_source::{PeerIdDataSource, PeerIdModel};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::identity::SeedError;

/// Structured error surfaced to the host, rendered as summary + detail
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{summary}: {detail}")]
pub struct Diagnostic {
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn new(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl From<SeedError> for Diagnostic {
    fn from(err: SeedError) -> Self {
        match err {
            SeedError::Decode(_) => Diagnostic::new(
                "Base64 decode",
                "Failed to base64-decode the provided secret key",
            ),
            SeedError::InvalidLength { actual } => Diagnostic::new(
                "Invalid secret key length",
                format!("Expected 32 bytes, got {actual}"),
            ),
        }
    }
}

impl From<crate::Error> for Diagnostic {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::Seed(e) => e.into(),
            crate::Error::PeerId(e) => Diagnostic::new("Peer ID", e.to_string()),
        }
    }
}

/// Provider-level data handed to data sources during configure
#[derive(Debug, Clone, Default)]
pub struct ProviderContext {
    pub version: String,
}

/// A single data source exposed to the host
pub trait DataSource {
    /// Full type name, derived from the provider's type name
    fn type_name(&self, provider_type: &str) -> String;

    /// Attribute schema, for host validation and documentation
    fn schema(&self) -> Schema;

    /// Receive provider-level data. Defaults to a no-op.
    fn configure(&mut self, _ctx: &ProviderContext) -> Result<(), Diagnostic> {
        Ok(())
    }

    /// Evaluate one configuration object into a result object
    fn read(&self, config: &Value) -> Result<Value, Diagnostic>;
}

/// The libp2p provider: no configuration of its own, one data source
pub struct Provider {
    version: String,
}

impl Provider {
    /// Version is "dev" for local builds and set by release tooling.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        "libp2p"
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The provider itself declares no attributes
    pub fn schema(&self) -> Schema {
        Schema::new("")
    }

    pub fn context(&self) -> ProviderContext {
        ProviderContext {
            version: self.version.clone(),
        }
    }

    pub fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
        vec![Box::new(PeerIdDataSource::new())]
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new("dev")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_metadata() {
        let provider = Provider::default();
        assert_eq!(provider.type_name(), "libp2p");
        assert_eq!(provider.version(), "dev");
        assert!(provider.schema().attributes.is_empty());
    }

    #[test]
    fn test_data_source_type_names() {
        let provider = Provider::default();
        let names: Vec<String> = provider
            .data_sources()
            .iter()
            .map(|ds| ds.type_name(provider.type_name()))
            .collect();
        assert_eq!(names, vec!["libp2p_peer_id"]);
    }

    #[test]
    fn test_diagnostic_from_seed_errors() {
        let diag = Diagnostic::from(SeedError::InvalidLength { actual: 33 });
        assert_eq!(diag.summary, "Invalid secret key length");
        assert_eq!(diag.detail, "Expected 32 bytes, got 33");

        let err = crate::identity::Seed::from_base64("!!").unwrap_err();
        let diag = Diagnostic::from(err);
        assert_eq!(diag.summary, "Base64 decode");
    }
}
