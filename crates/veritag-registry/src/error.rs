/// Errors produced by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The caller is not the registry owner.
    #[error("unauthorized: caller is not the registry owner")]
    Unauthorized,

    /// The identifier has already been registered. Applies to brands and to
    /// products, and for products it covers deactivated records too:
    /// identifiers are never resurrected.
    #[error("already registered: {0}")]
    AlreadyExists(String),

    /// The record was never registered, or (for products) is currently
    /// inactive. Those two cases are deliberately indistinguishable at the
    /// read interface.
    #[error("not found: {0}")]
    NotFound(String),

    /// Deactivation target has no record at all.
    #[error("product not registered: {0}")]
    NotRegistered(String),

    /// Transient infrastructure failure. Eligible for fallback substitution
    /// by the caller.
    #[error("registry unreachable: {0}")]
    Unreachable(String),
}
