use std::collections::HashMap;
use std::sync::RwLock;

use veritag_types::{ContentId, ProductDocument};

use crate::error::{StoreError, StoreResult};
use crate::traits::ContentStore;

/// In-memory, content-addressed store.
///
/// Intended for tests and embedding. Identifiers are BLAKE3 hashes of the
/// stored bytes under a domain prefix, hex-encoded, so identical payloads
/// deduplicate and writes are idempotent. Raw bytes are held behind a
/// `RwLock` for safe concurrent access.
pub struct InMemoryContentStore {
    objects: RwLock<HashMap<ContentId, Vec<u8>>>,
}

impl InMemoryContentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of distinct payloads currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Overwrite the payload at an identifier with arbitrary bytes.
    ///
    /// Test hook for simulating upstream corruption; real backends never
    /// expose mutation.
    #[doc(hidden)]
    pub fn corrupt(&self, id: &ContentId, bytes: Vec<u8>) {
        self.objects
            .write()
            .expect("lock poisoned")
            .insert(id.clone(), bytes);
    }

    fn store_bytes(&self, bytes: Vec<u8>) -> ContentId {
        let id = content_id_for(&bytes);
        let mut map = self.objects.write().expect("lock poisoned");
        // Idempotent: content addressing maps equal payloads to equal ids.
        map.entry(id.clone()).or_insert(bytes);
        id
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore for InMemoryContentStore {
    fn put(&self, document: &ProductDocument) -> StoreResult<ContentId> {
        let bytes = serde_json::to_vec(document)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(self.store_bytes(bytes))
    }

    fn put_blob(&self, bytes: &[u8]) -> StoreResult<ContentId> {
        Ok(self.store_bytes(bytes.to_vec()))
    }

    fn get(&self, id: &ContentId) -> StoreResult<ProductDocument> {
        let map = self.objects.read().expect("lock poisoned");
        let bytes = map
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupt {
            id: id.clone(),
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for InMemoryContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryContentStore")
            .field("object_count", &self.len())
            .finish()
    }
}

fn content_id_for(bytes: &[u8]) -> ContentId {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"veritag-content-v1:");
    hasher.update(bytes);
    ContentId::new(hex::encode(hasher.finalize().as_bytes()))
}
