//! Signature engine for the Veritag protocol.
//!
//! Ed25519 throughout, with all material hex-encoded at the API boundary so
//! keys and signatures travel as opaque strings on tags and in receipts:
//!
//! - [`KeyPair::generate`] — fresh 32-byte public / 64-byte private key pair
//! - [`sign`] — detached signature over the exact message bytes
//! - [`verify`] — detached verification; cryptographic mismatch is `false`,
//!   never an error
//!
//! The 64-byte private key layout is seed‖public, the conventional expanded
//! secret-key form, so material round-trips with tooling that expects it.

pub mod detached;
pub mod error;
pub mod keys;

pub use detached::{sign, verify};
pub use error::CryptoError;
pub use keys::KeyPair;

/// Public key length in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;
/// Private key length in bytes (seed ‖ public key).
pub const PRIVATE_KEY_LEN: usize = 64;
/// Detached signature length in bytes.
pub const SIGNATURE_LEN: usize = 64;
