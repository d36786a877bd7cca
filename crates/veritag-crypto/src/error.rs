use thiserror::Error;

/// Errors from signing operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The private key is not usable for signing.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// A signature or public key could not be decoded from its expected
    /// hex representation.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}
