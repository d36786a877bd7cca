//! Registry ledger for the Veritag protocol.
//!
//! An append-only, owner-gated state machine over brand and product records,
//! exposed through a transactional call/query interface. The ledger is the
//! single writer for brand and product state; per-product lifecycle is
//! `Unregistered → Active → Deactivated`, with `Deactivated` terminal and a
//! product identifier never reusable once registered.
//!
//! Backends may be a real distributed ledger or the in-memory stand-in
//! provided here; both present the same observable contract. The
//! [`FallbackProvider`] interface lets a verification caller substitute a
//! locally held record when the ledger itself is unreachable.

pub mod error;
pub mod fallback;
pub mod memory;
pub mod records;
pub mod traits;

pub use error::RegistryError;
pub use fallback::{FallbackProvider, InMemoryFallback, NoFallback};
pub use memory::InMemoryRegistry;
pub use records::{BrandInfo, ProductInfo, RegistryEvent, TxReceipt};
pub use traits::{Registry, RegistryReader, RegistryWriter};
