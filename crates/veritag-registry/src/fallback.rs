use std::collections::HashMap;
use std::sync::RwLock;

use veritag_types::ProductId;

use crate::records::ProductInfo;

/// Read interface for locally held stand-in records, consulted only when
/// the registry ledger is unreachable or has no record.
///
/// Injected into the verification pipeline rather than living as a global
/// table, so embedders control exactly which records may substitute for
/// chain truth. Every answer sourced here is flagged as fallback data in
/// the verification report.
pub trait FallbackProvider: Send + Sync {
    fn lookup(&self, product_id: &ProductId) -> Option<ProductInfo>;
}

/// Map-backed fallback provider, seeded explicitly by the embedder.
#[derive(Default)]
pub struct InMemoryFallback {
    records: RwLock<HashMap<ProductId, ProductInfo>>,
}

impl InMemoryFallback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace the fallback record for a product.
    pub fn insert(&self, product_id: ProductId, info: ProductInfo) {
        self.records
            .write()
            .expect("lock poisoned")
            .insert(product_id, info);
    }
}

impl FallbackProvider for InMemoryFallback {
    fn lookup(&self, product_id: &ProductId) -> Option<ProductInfo> {
        self.records
            .read()
            .expect("lock poisoned")
            .get(product_id)
            .cloned()
    }
}

/// Fallback provider with no records. Verification against an unreachable
/// ledger terminates as untrusted instead of degrading.
#[derive(Debug, Default)]
pub struct NoFallback;

impl FallbackProvider for NoFallback {
    fn lookup(&self, _product_id: &ProductId) -> Option<ProductInfo> {
        None
    }
}
