use veritag_types::ContentId;

/// Errors from content store operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The store reports no document at this identifier.
    #[error("content not found: {0}")]
    NotFound(ContentId),

    /// Transport or authentication failure. Eligible for degraded-mode
    /// substitution by the caller.
    #[error("content store unavailable: {0}")]
    Unavailable(String),

    /// The payload at this identifier is not parseable as the expected
    /// document shape.
    #[error("corrupt content {id}: {reason}")]
    Corrupt { id: ContentId, reason: String },

    /// Serialization failure on the way in.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
