//! Ed25519 key expansion

use ed25519_dalek::{SigningKey, VerifyingKey};

use super::Seed;

/// Ed25519 key pair expanded from a seed.
///
/// Nothing in this crate signs, so the signing half is dropped (and
/// zeroized by `ed25519-dalek`) as soon as the verifying key has been
/// derived; only the public half is retained.
#[derive(Clone)]
pub struct KeyPair {
    verifying_key: VerifyingKey,
}

impl KeyPair {
    /// Expand a seed into a key pair (RFC 8032, SHA-512 based).
    /// Cannot fail for a correctly sized seed.
    pub fn from_seed(seed: &Seed) -> Self {
        let signing_key = SigningKey::from_bytes(seed.as_bytes());
        Self {
            verifying_key: signing_key.verifying_key(),
        }
    }

    /// Get the public key bytes
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::SEED_LEN;

    #[test]
    fn test_expansion_is_deterministic() {
        let seed = Seed::from_bytes([9u8; SEED_LEN]);
        let a = KeyPair::from_seed(&seed);
        let b = KeyPair::from_seed(&seed);
        assert_eq!(a.public_key_bytes(), b.public_key_bytes());
    }

    #[test]
    fn test_known_public_keys() {
        // RFC 8032 expansion of the all-zero seed
        let zero = KeyPair::from_seed(&Seed::from_bytes([0u8; SEED_LEN]));
        assert_eq!(
            hex::encode(zero.public_key_bytes()),
            "3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29"
        );

        let ascii = Seed::from_bytes(*b"00000000000000000000000000000001");
        let pair = KeyPair::from_seed(&ascii);
        assert_eq!(
            hex::encode(pair.public_key_bytes()),
            "1d3ac5af95f0324386f4680ca5fffa3c7a50d3f78cbb24c424d4db1dca117e0d"
        );
    }

    #[test]
    fn test_public_key_differs_from_seed() {
        let raw = [3u8; SEED_LEN];
        let pair = KeyPair::from_seed(&Seed::from_bytes(raw));
        assert_ne!(pair.public_key_bytes(), raw);
    }
}
