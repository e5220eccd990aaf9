//! Peer identifier encoding
//!
//! A libp2p peer ID is a multihash over the node's public key, wrapped
//! in the minimal protobuf envelope used across the libp2p ecosystem.
//! Small keys (the envelope fits in 42 bytes, always true for Ed25519)
//! are embedded verbatim under the identity multihash; larger keys are
//! digested with SHA-256. The multihash is rendered in base58 with the
//! Bitcoin alphabet.

use std::fmt;

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::identity::{KeyPair, Seed, SeedError};

/// Raw Ed25519 public keys are 32 bytes
pub const PUBLIC_KEY_LEN: usize = 32;

/// Protobuf envelope prefix for an Ed25519 public key: field 1 (KeyType)
/// varint = 1, field 2 (Data) length-delimited, 32 bytes.
const ED25519_ENVELOPE_PREFIX: [u8; 4] = [0x08, 0x01, 0x12, 0x20];

/// Multihash function codes
const MH_IDENTITY: u8 = 0x00;
const MH_SHA2_256: u8 = 0x12;
const SHA2_256_LEN: usize = 32;

/// Envelopes up to this size are embedded verbatim (identity multihash)
const MAX_INLINE_KEY_LEN: usize = 42;

#[derive(Error, Debug)]
pub enum PeerIdError {
    #[error("Invalid base58 encoding: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("Invalid multihash: {0}")]
    Multihash(String),

    #[error("Public key is not embedded in this peer ID")]
    KeyNotInline,
}

/// A libp2p peer identifier: the multihash of an enveloped public key
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PeerId {
    multihash: Vec<u8>,
}

impl PeerId {
    /// Compute the peer ID for a raw Ed25519 public key
    pub fn from_public_key(public_key: &[u8; PUBLIC_KEY_LEN]) -> Self {
        let mut envelope = Vec::with_capacity(ED25519_ENVELOPE_PREFIX.len() + PUBLIC_KEY_LEN);
        envelope.extend_from_slice(&ED25519_ENVELOPE_PREFIX);
        envelope.extend_from_slice(public_key);

        let multihash = if envelope.len() <= MAX_INLINE_KEY_LEN {
            let mut mh = Vec::with_capacity(2 + envelope.len());
            mh.push(MH_IDENTITY);
            mh.push(envelope.len() as u8);
            mh.extend_from_slice(&envelope);
            mh
        } else {
            let digest = Sha256::digest(&envelope);
            let mut mh = Vec::with_capacity(2 + SHA2_256_LEN);
            mh.push(MH_SHA2_256);
            mh.push(SHA2_256_LEN as u8);
            mh.extend_from_slice(&digest);
            mh
        };

        Self { multihash }
    }

    /// Derive the peer ID for a seed
    pub fn from_seed(seed: &Seed) -> Self {
        let keys = KeyPair::from_seed(seed);
        Self::from_public_key(&keys.public_key_bytes())
    }

    /// Derive the peer ID for a base64-encoded 32-byte seed
    pub fn from_seed_base64(encoded: &str) -> Result<Self, SeedError> {
        let seed = Seed::from_base64(encoded)?;
        Ok(Self::from_seed(&seed))
    }

    /// Parse a base58-rendered peer ID back into its multihash
    pub fn from_base58(s: &str) -> Result<Self, PeerIdError> {
        let multihash = bs58::decode(s).into_vec()?;
        Self::from_multihash(multihash)
    }

    fn from_multihash(multihash: Vec<u8>) -> Result<Self, PeerIdError> {
        let (code, len, payload) = match multihash.as_slice() {
            [code, len, payload @ ..] => (*code, *len as usize, payload),
            _ => {
                return Err(PeerIdError::Multihash(format!(
                    "too short: {} bytes",
                    multihash.len()
                )))
            }
        };

        if code != MH_IDENTITY && code != MH_SHA2_256 {
            return Err(PeerIdError::Multihash(format!(
                "unsupported function code 0x{code:02x}"
            )));
        }
        if payload.len() != len {
            return Err(PeerIdError::Multihash(format!(
                "declared {len} payload bytes, found {}",
                payload.len()
            )));
        }

        Ok(Self { multihash })
    }

    /// Extract the Ed25519 public key embedded in an identity multihash.
    ///
    /// Peer IDs built from keys too large to inline carry only a SHA-256
    /// digest; the key is not recoverable from those.
    pub fn public_key(&self) -> Result<[u8; PUBLIC_KEY_LEN], PeerIdError> {
        let (code, payload) = (self.multihash[0], &self.multihash[2..]);
        if code != MH_IDENTITY {
            return Err(PeerIdError::KeyNotInline);
        }

        let key = payload
            .strip_prefix(&ED25519_ENVELOPE_PREFIX[..])
            .ok_or_else(|| {
                PeerIdError::Multihash("embedded key is not an Ed25519 envelope".to_string())
            })?;

        key.try_into().map_err(|_| {
            PeerIdError::Multihash(format!("embedded key is {} bytes", key.len()))
        })
    }

    /// Get the raw multihash bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.multihash
    }

    /// Render as base58 (Bitcoin alphabet)
    pub fn to_base58(&self) -> String {
        bs58::encode(&self.multihash).into_string()
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeerId({})", self.to_base58())
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl std::str::FromStr for PeerId {
    type Err = PeerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}
