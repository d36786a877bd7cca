use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::id::{BrandId, ProductId, SerialNumber};

/// The canonical message a tag's signature covers.
///
/// Serialization is the exact byte sequence
/// `{"productId":"..","brandId":"..","serialNumber":".."}` — field order and
/// the absence of whitespace are part of the protocol. Signer and verifier
/// both derive the message through [`TagMessage::canonical_json`]; assembling
/// the JSON by hand risks a byte-level mismatch that invalidates every
/// signature.
///
/// Fields are plain strings: at verification time they are caller-supplied
/// and may be arbitrary (a tampered tag is still a verifiable claim).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagMessage {
    pub product_id: String,
    pub brand_id: String,
    pub serial_number: String,
}

impl TagMessage {
    pub fn new(
        product_id: impl Into<String>,
        brand_id: impl Into<String>,
        serial_number: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            brand_id: brand_id.into(),
            serial_number: serial_number.into(),
        }
    }

    /// The canonical compact JSON encoding.
    pub fn canonical_json(&self) -> Result<String, TypeError> {
        serde_json::to_string(self).map_err(|e| TypeError::Serialization(e.to_string()))
    }
}

/// The physical-item-facing payload: identity fields plus the detached
/// signature and the public key that is claimed to have produced it.
///
/// This is what a scanner reads off an NFC tag and submits for verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub product_id: ProductId,
    pub brand_id: BrandId,
    pub serial_number: SerialNumber,
    /// Detached signature, hex.
    pub signature: String,
    /// Public key claimed to have produced the signature, hex.
    pub public_key: String,
}

impl Tag {
    /// The message this tag's signature is expected to cover.
    pub fn signable_message(&self) -> TagMessage {
        TagMessage::new(
            self.product_id.as_str(),
            self.brand_id.as_str(),
            self.serial_number.as_str(),
        )
    }
}
