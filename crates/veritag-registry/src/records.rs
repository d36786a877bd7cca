use serde::{Deserialize, Serialize};
use veritag_types::{BrandId, ContentId, ProductId};

/// What `get_brand` returns: the on-ledger view of a registered brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInfo {
    /// Unix seconds at commit time.
    pub registration_time: i64,
}

/// What `get_product` returns: the on-ledger view of an active product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub content_id: ContentId,
    /// Hex-encoded public verification key bound at registration.
    pub public_key: String,
    /// Unix seconds at commit time.
    pub registration_time: i64,
    pub is_active: bool,
}

/// Transaction receipt for a committed registry write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    /// `0x`-prefixed transaction hash.
    pub tx_hash: String,
    pub block_number: u64,
    /// Unix seconds at commit time.
    pub timestamp: i64,
}

/// Events emitted by committed registry writes, observable by external
/// listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RegistryEvent {
    BrandRegistered { brand_id: BrandId, timestamp: i64 },
    ProductRegistered { product_id: ProductId, timestamp: i64 },
    ProductDeactivated { product_id: ProductId, timestamp: i64 },
}
