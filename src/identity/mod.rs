//! Identity Module - Ed25519 seed handling and key derivation
//!
//! A peer's identity starts from a 32-byte seed, supplied base64-encoded
//! by the host configuration. The seed is expanded deterministically
//! into an Ed25519 key pair; only the public half leaves this module.

mod seed;
mod keys;

pub use seed::{Seed, SEED_LEN};
pub use keys::KeyPair;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to base64-decode the secret key: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Invalid secret key length: expected 32 bytes, got {actual}")]
    InvalidLength { actual: usize },
}
