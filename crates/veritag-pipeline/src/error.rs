use thiserror::Error;
use veritag_crypto::CryptoError;
use veritag_registry::RegistryError;
use veritag_types::TypeError;

/// Terminal pipeline failures.
///
/// Degraded-mode conditions (store down, ledger record served from
/// fallback) are not errors — they surface inside the verification report.
/// Only input rejection and the cases where no decision is possible at all
/// end up here.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Registration input violated the field-format rules. Carries every
    /// violation, not just the first.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Lifecycle or authorization failure from the registry, surfaced
    /// verbatim.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Verification target could not be resolved: the ledger failed and no
    /// fallback record exists. The tag cannot be trusted at all.
    #[error("product {product_id} not found or registry error: {reason}")]
    ProductUnavailable { product_id: String, reason: String },

    /// Signing failure during registration.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Canonical serialization failure.
    #[error(transparent)]
    Types(#[from] TypeError),
}
