//! Content store boundary for the Veritag protocol.
//!
//! The store holds exactly one relation: content identifier → immutable
//! JSON document (plus raw blobs for product images). It is an external
//! service with a narrow contract; this crate provides the trait, an
//! in-memory content-addressed implementation for tests and embedding, and
//! an always-failing double for exercising degraded-mode paths.
//!
//! Call timing is logged by the caller, not here.

pub mod error;
pub mod memory;
pub mod traits;
pub mod unavailable;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryContentStore;
pub use traits::ContentStore;
pub use unavailable::UnavailableContentStore;

/// Default public gateway base for rendering retrieval URLs.
pub const DEFAULT_GATEWAY: &str = "https://gateway.pinata.cloud";

/// Render the retrieval URL for a content identifier behind a gateway.
pub fn gateway_url(base: &str, id: &veritag_types::ContentId) -> String {
    format!("{}/ipfs/{}", base.trim_end_matches('/'), id)
}
