//! Seed decoding and validation

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use super::SeedError;

/// Ed25519 seeds are exactly 32 bytes
pub const SEED_LEN: usize = 32;

/// Raw 32-byte Ed25519 seed
///
/// The seed is sensitive material: it never appears in `Debug` output
/// and the type exposes it only to key derivation within the crate.
#[derive(Clone)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Create from raw bytes (length is enforced by the type)
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Decode from standard padded base64.
    ///
    /// Any decoded length other than 32 is rejected with the observed
    /// length, never silently truncated or padded.
    pub fn from_base64(encoded: &str) -> Result<Self, SeedError> {
        let bytes = BASE64.decode(encoded)?;
        let bytes: [u8; SEED_LEN] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| SeedError::InvalidLength { actual: v.len() })?;
        Ok(Self(bytes))
    }

    /// Get the raw seed bytes
    pub(crate) fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed(****)")
    }
}
