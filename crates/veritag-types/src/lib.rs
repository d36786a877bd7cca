//! Foundation types for the Veritag product authenticity protocol.
//!
//! This crate provides the identifier, message, and document types used
//! throughout the Veritag system. Every other Veritag crate depends on
//! `veritag-types`.
//!
//! # Key Types
//!
//! - [`BrandId`] / [`ProductId`] — Registry identifiers (3–20 chars, `A-Z0-9_`)
//! - [`SerialNumber`] — Physical item serial (3–20 chars, `A-Z0-9-`)
//! - [`ContentId`] — Opaque reference into the off-chain content store
//! - [`CallerId`] — Identity presented on privileged registry calls
//! - [`TagMessage`] — The canonical `{productId, brandId, serialNumber}` message
//! - [`Tag`] — The scanned payload: identity fields, signature, public key
//! - [`ProductDocument`] — Off-chain product metadata stored per content id

pub mod document;
pub mod error;
pub mod id;
pub mod message;
pub mod validate;

pub use document::{ProductDocument, Warranty};
pub use error::TypeError;
pub use id::{BrandId, CallerId, ContentId, ProductId, SerialNumber};
pub use message::{Tag, TagMessage};
