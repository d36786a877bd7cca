use veritag_types::{ContentId, ProductDocument};

use crate::error::StoreResult;

/// Content-addressed document store.
///
/// All implementations must satisfy these invariants:
/// - Documents are immutable once written; a content identifier is never
///   reused for a different payload.
/// - `put` serializes deterministically, so the same document always yields
///   the same identifier on content-addressed backends.
/// - The store never interprets document contents beyond (de)serialization.
/// - Transport failures surface as `Unavailable`; the caller decides whether
///   to retry or substitute a placeholder identifier.
pub trait ContentStore: Send + Sync {
    /// Serialize and store a document, returning its content identifier.
    fn put(&self, document: &ProductDocument) -> StoreResult<ContentId>;

    /// Store a raw binary asset (e.g. a product image), returning its
    /// content identifier.
    fn put_blob(&self, bytes: &[u8]) -> StoreResult<ContentId>;

    /// Fetch and deserialize the document at `id`.
    ///
    /// Fails with `NotFound` if the store has no such identifier and
    /// `Corrupt` if the payload does not parse as a document.
    fn get(&self, id: &ContentId) -> StoreResult<ProductDocument>;
}
