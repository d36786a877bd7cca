use serde::{Deserialize, Serialize};

use crate::{PRIVATE_KEY_LEN, PUBLIC_KEY_LEN};

/// Freshly minted Ed25519 key pair, hex-encoded.
///
/// The private key is the 64-byte seed‖public expanded form (128 hex
/// characters); the public key is 32 bytes (64 hex characters).
///
/// Serialization includes the private key. Registration receipts return the
/// full pair to the caller so the private half can be burned into the
/// physical tag; callers own the custody problem from that point on.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    public_key: String,
    private_key: String,
}

impl KeyPair {
    /// Generate a fresh random key pair.
    pub fn generate() -> Self {
        let signing = ed25519_dalek::SigningKey::generate(&mut rand::thread_rng());
        Self {
            public_key: hex::encode(signing.verifying_key().to_bytes()),
            private_key: hex::encode(signing.to_keypair_bytes()),
        }
    }

    /// Hex-encoded 32-byte public key.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Hex-encoded 64-byte private key.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
