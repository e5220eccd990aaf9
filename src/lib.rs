//! libp2p Peer ID derivation
//!
//! This crate derives a libp2p peer identifier from a base64-encoded
//! 32-byte Ed25519 seed and exposes the computation to a
//! configuration-management host through a small data-source interface.
//!
//! The derivation is a pure, deterministic transformation: decode the
//! seed, expand it into an Ed25519 key pair, wrap the public key in the
//! libp2p protobuf envelope, multihash the envelope, and render the
//! result in base58 (Bitcoin alphabet).

pub mod identity;
pub mod peer_id;
pub mod provider;

use thiserror::Error;

/// Main error type for peer ID derivation
#[derive(Error, Debug)]
pub enum Error {
    #[error("Seed error: {0}")]
    Seed(#[from] identity::SeedError),

    #[error("Peer ID error: {0}")]
    PeerId(#[from] peer_id::PeerIdError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Derive the base58 peer identifier for a base64-encoded Ed25519 seed.
///
/// The input must be standard padded base64 decoding to exactly 32
/// bytes. Identical input always yields an identical identifier; the
/// function holds no state and is safe to call concurrently.
pub fn derive_peer_id(seed_base64: &str) -> Result<String> {
    let peer_id = peer_id::PeerId::from_seed_base64(seed_base64)?;
    Ok(peer_id.to_base58())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_peer_id() {
        // base64 of the ASCII bytes "00000000000000000000000000000001"
        let id = derive_peer_id("MDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDE=").unwrap();
        assert_eq!(id, "12D3KooWBnTyEyBVeYpZJobw78rb85nNamrYQR3Tc6gJmfQ76pG4");
    }

    #[test]
    fn test_derive_rejects_bad_input() {
        assert!(matches!(
            derive_peer_id("not base64!"),
            Err(Error::Seed(identity::SeedError::Decode(_)))
        ));
        // "c2hvcnQ=" decodes to the 5 bytes "short"
        assert!(matches!(
            derive_peer_id("c2hvcnQ="),
            Err(Error::Seed(identity::SeedError::InvalidLength { actual: 5 }))
        ));
    }
}
