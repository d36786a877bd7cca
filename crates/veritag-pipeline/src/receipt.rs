use serde::{Deserialize, Serialize};
use veritag_crypto::KeyPair;
use veritag_types::{BrandId, ContentId, ProductId, SerialNumber, Tag};

/// Composite result of a successful product registration.
///
/// Carries everything the caller needs to provision a physical tag: the
/// chain transaction reference, the freshly minted key pair, and the
/// detached signature over the canonical tag message.
///
/// The key pair includes the private key. Returning it across this boundary
/// is a deliberate trust decision carried over from the protocol: the
/// registrar mints the tag's identity and hands the whole of it to the
/// brand, which then owns custody. Whether the private key should ever
/// leave the minting boundary in production remains an open question at the
/// protocol level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReceipt {
    /// `0x`-prefixed registry transaction hash.
    pub tx_hash: String,
    pub block_number: u64,
    /// Identifier of the stored product document. Synthetic when the
    /// content store was unavailable at registration time.
    pub content_id: ContentId,
    /// Gateway retrieval URL for the stored document.
    pub content_url: String,
    /// Detached signature over `signed_message`, hex.
    pub signature: String,
    /// The tag's public key (same as `key_pair`'s public half), hex.
    pub tag_public_key: String,
    /// The freshly minted key pair, private half included.
    pub key_pair: KeyPair,
    /// The exact canonical message the signature covers.
    pub signed_message: String,
    pub product_id: ProductId,
    pub brand_id: BrandId,
    pub serial_number: SerialNumber,
    /// Retrieval URL of the uploaded product image; a placeholder URL when
    /// the asset upload failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// RFC 3339 registration timestamp.
    pub timestamp: String,
}

impl RegistrationReceipt {
    /// The payload to burn into the physical tag: identity fields, the
    /// detached signature, and the public half of the minted key pair.
    pub fn tag(&self) -> Tag {
        Tag {
            product_id: self.product_id.clone(),
            brand_id: self.brand_id.clone(),
            serial_number: self.serial_number.clone(),
            signature: self.signature.clone(),
            public_key: self.tag_public_key.clone(),
        }
    }
}
