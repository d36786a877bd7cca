use veritag_types::{BrandId, CallerId, ContentId, ProductId};

use crate::error::RegistryError;
use crate::records::{BrandInfo, ProductInfo, TxReceipt};

/// Write boundary for registry mutations. Every call is owner-gated: the
/// `caller` identity is checked against the owner established at deployment
/// before any state is touched.
pub trait RegistryWriter: Send + Sync {
    /// Register a brand. Fails with `AlreadyExists` if the identifier is
    /// taken. Emits `BrandRegistered` on success.
    fn register_brand(
        &self,
        caller: &CallerId,
        brand_id: &BrandId,
    ) -> Result<TxReceipt, RegistryError>;

    /// Register a product bound to off-chain content and a verification
    /// key. Fails with `AlreadyExists` if the identifier has ever been
    /// registered, active or not. No brand-existence check is performed at
    /// this layer; first registration wins.
    fn register_product(
        &self,
        caller: &CallerId,
        product_id: &ProductId,
        content_id: &ContentId,
        public_key: &str,
    ) -> Result<TxReceipt, RegistryError>;

    /// Permanently flip a product inactive. Fails with `NotRegistered` if
    /// there is no record. Emits `ProductDeactivated` on success.
    fn deactivate_product(
        &self,
        caller: &CallerId,
        product_id: &ProductId,
    ) -> Result<TxReceipt, RegistryError>;
}

/// Read boundary for registry queries. Unauthenticated.
pub trait RegistryReader: Send + Sync {
    /// Look up an active product. An inactive product is indistinguishable
    /// from an absent one: both fail with `NotFound`. Deactivation is a
    /// hard revocation, not a soft flag visible to readers.
    fn get_product(&self, product_id: &ProductId) -> Result<ProductInfo, RegistryError>;

    /// Whether a brand identifier has been registered. No failure mode
    /// beyond infrastructure errors.
    fn is_brand_registered(&self, brand_id: &BrandId) -> Result<bool, RegistryError>;

    /// Look up a registered brand. Fails with `NotFound` if the brand was
    /// never registered.
    fn get_brand(&self, brand_id: &BrandId) -> Result<BrandInfo, RegistryError>;
}

/// Combined call surface, for callers that hold one handle to both sides.
pub trait Registry: RegistryReader + RegistryWriter {}

impl<T: RegistryReader + RegistryWriter> Registry for T {}
