use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;
use veritag_types::{BrandId, CallerId, ContentId, ProductId};

use crate::error::RegistryError;
use crate::records::{BrandInfo, ProductInfo, RegistryEvent, TxReceipt};
use crate::traits::{RegistryReader, RegistryWriter};

/// In-memory registry implementation for tests, local demos, and embedding.
///
/// Presents the same observable contract as an on-chain deployment: writes
/// are serialized through a `RwLock`, so two concurrent registrations of the
/// same identifier resolve with exactly one success and one `AlreadyExists`.
pub struct InMemoryRegistry {
    owner: CallerId,
    inner: RwLock<RegistryState>,
}

#[derive(Default)]
struct RegistryState {
    brands: HashMap<BrandId, BrandRecord>,
    products: HashMap<ProductId, ProductRecord>,
    events: Vec<RegistryEvent>,
    block_number: u64,
}

struct BrandRecord {
    registered_at: i64,
}

struct ProductRecord {
    content_id: ContentId,
    public_key: String,
    registered_at: i64,
    is_active: bool,
}

impl InMemoryRegistry {
    /// Create a registry owned by `owner`. The owner identity is fixed at
    /// deployment; there is no ownership transfer.
    pub fn new(owner: CallerId) -> Self {
        Self {
            owner,
            inner: RwLock::new(RegistryState::default()),
        }
    }

    /// All events emitted so far, in commit order.
    pub fn events(&self) -> Result<Vec<RegistryEvent>, RegistryError> {
        Ok(self.read_state()?.events.clone())
    }

    fn authorize(&self, caller: &CallerId) -> Result<(), RegistryError> {
        if caller == &self.owner {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized)
        }
    }

    fn read_state(&self) -> Result<std::sync::RwLockReadGuard<'_, RegistryState>, RegistryError> {
        self.inner
            .read()
            .map_err(|_| RegistryError::Unreachable("registry read lock poisoned".into()))
    }

    fn write_state(&self) -> Result<std::sync::RwLockWriteGuard<'_, RegistryState>, RegistryError> {
        self.inner
            .write()
            .map_err(|_| RegistryError::Unreachable("registry write lock poisoned".into()))
    }
}

impl RegistryWriter for InMemoryRegistry {
    fn register_brand(
        &self,
        caller: &CallerId,
        brand_id: &BrandId,
    ) -> Result<TxReceipt, RegistryError> {
        self.authorize(caller)?;
        let mut state = self.write_state()?;

        if state.brands.contains_key(brand_id) {
            return Err(RegistryError::AlreadyExists(brand_id.to_string()));
        }

        let receipt = state.commit("register-brand", brand_id.as_str());
        state.brands.insert(
            brand_id.clone(),
            BrandRecord {
                registered_at: receipt.timestamp,
            },
        );
        state.events.push(RegistryEvent::BrandRegistered {
            brand_id: brand_id.clone(),
            timestamp: receipt.timestamp,
        });

        debug!(brand_id = %brand_id, tx_hash = %receipt.tx_hash, "brand registered");
        Ok(receipt)
    }

    fn register_product(
        &self,
        caller: &CallerId,
        product_id: &ProductId,
        content_id: &ContentId,
        public_key: &str,
    ) -> Result<TxReceipt, RegistryError> {
        self.authorize(caller)?;
        let mut state = self.write_state()?;

        // Covers deactivated records too: a product identifier is spent
        // forever once registered.
        if state.products.contains_key(product_id) {
            return Err(RegistryError::AlreadyExists(product_id.to_string()));
        }

        let receipt = state.commit("register-product", product_id.as_str());
        state.products.insert(
            product_id.clone(),
            ProductRecord {
                content_id: content_id.clone(),
                public_key: public_key.to_string(),
                registered_at: receipt.timestamp,
                is_active: true,
            },
        );
        state.events.push(RegistryEvent::ProductRegistered {
            product_id: product_id.clone(),
            timestamp: receipt.timestamp,
        });

        debug!(product_id = %product_id, content_id = %content_id, "product registered");
        Ok(receipt)
    }

    fn deactivate_product(
        &self,
        caller: &CallerId,
        product_id: &ProductId,
    ) -> Result<TxReceipt, RegistryError> {
        self.authorize(caller)?;
        let mut state = self.write_state()?;

        if !state.products.contains_key(product_id) {
            return Err(RegistryError::NotRegistered(product_id.to_string()));
        }

        let receipt = state.commit("deactivate-product", product_id.as_str());
        if let Some(record) = state.products.get_mut(product_id) {
            record.is_active = false;
        }
        state.events.push(RegistryEvent::ProductDeactivated {
            product_id: product_id.clone(),
            timestamp: receipt.timestamp,
        });

        debug!(product_id = %product_id, "product deactivated");
        Ok(receipt)
    }
}

impl RegistryReader for InMemoryRegistry {
    fn get_product(&self, product_id: &ProductId) -> Result<ProductInfo, RegistryError> {
        let state = self.read_state()?;
        match state.products.get(product_id) {
            Some(record) if record.is_active => Ok(ProductInfo {
                content_id: record.content_id.clone(),
                public_key: record.public_key.clone(),
                registration_time: record.registered_at,
                is_active: record.is_active,
            }),
            // Inactive reads exactly like absent.
            _ => Err(RegistryError::NotFound(product_id.to_string())),
        }
    }

    fn is_brand_registered(&self, brand_id: &BrandId) -> Result<bool, RegistryError> {
        Ok(self.read_state()?.brands.contains_key(brand_id))
    }

    fn get_brand(&self, brand_id: &BrandId) -> Result<BrandInfo, RegistryError> {
        self.read_state()?
            .brands
            .get(brand_id)
            .map(|record| BrandInfo {
                registration_time: record.registered_at,
            })
            .ok_or_else(|| RegistryError::NotFound(brand_id.to_string()))
    }
}

impl RegistryState {
    /// Mint the receipt for the write being committed: bump the block
    /// counter and derive the transaction hash from the operation, its
    /// subject, and the commit position.
    fn commit(&mut self, op: &str, subject: &str) -> TxReceipt {
        self.block_number += 1;
        let timestamp = chrono::Utc::now().timestamp();

        let mut hasher = blake3::Hasher::new();
        hasher.update(b"veritag-tx-v1:");
        hasher.update(op.as_bytes());
        hasher.update(b":");
        hasher.update(subject.as_bytes());
        hasher.update(b":");
        hasher.update(&self.block_number.to_be_bytes());
        hasher.update(&timestamp.to_be_bytes());

        TxReceipt {
            tx_hash: format!("0x{}", hex::encode(hasher.finalize().as_bytes())),
            block_number: self.block_number,
            timestamp,
        }
    }
}

impl std::fmt::Debug for InMemoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.read().expect("lock poisoned");
        f.debug_struct("InMemoryRegistry")
            .field("owner", &self.owner)
            .field("brands", &state.brands.len())
            .field("products", &state.products.len())
            .finish()
    }
}
