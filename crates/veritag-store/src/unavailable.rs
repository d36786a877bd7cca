use veritag_types::{ContentId, ProductDocument};

use crate::error::{StoreError, StoreResult};
use crate::traits::ContentStore;

/// Store double whose every operation fails with `Unavailable`.
///
/// Stands in for an unreachable backend when exercising the pipeline's
/// degraded-mode paths.
#[derive(Debug, Default)]
pub struct UnavailableContentStore;

impl UnavailableContentStore {
    pub fn new() -> Self {
        Self
    }
}

impl ContentStore for UnavailableContentStore {
    fn put(&self, _document: &ProductDocument) -> StoreResult<ContentId> {
        Err(StoreError::Unavailable("content store offline".into()))
    }

    fn put_blob(&self, _bytes: &[u8]) -> StoreResult<ContentId> {
        Err(StoreError::Unavailable("content store offline".into()))
    }

    fn get(&self, _id: &ContentId) -> StoreResult<ProductDocument> {
        Err(StoreError::Unavailable("content store offline".into()))
    }
}
