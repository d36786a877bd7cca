//! Verification pipeline for the Veritag protocol.
//!
//! The pipeline orchestrates the three sources of truth — registry ledger,
//! content store, signature engine — into two flows:
//!
//! - [`Pipeline::register_product`] writes the product document off-chain,
//!   mints a fresh key pair, and commits the binding to the registry,
//!   returning a composite [`RegistrationReceipt`].
//! - [`Pipeline::verify_product`] reconciles the ledger record, the stored
//!   document, and the tag's detached signature into one
//!   [`VerificationReport`].
//!
//! Verification is best-effort and never aborts on a partial subsystem
//! failure: every step's outcome lands in the report's flags and
//! [`Diagnostics`], and fallback or placeholder substitutions are always
//! labeled. Callers must inspect the individual flags to decide trust; a
//! returned report is a decision, not an endorsement.

pub mod error;
pub mod pipeline;
pub mod receipt;
pub mod report;
pub mod request;

pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use receipt::RegistrationReceipt;
pub use report::{Diagnostics, VerificationReport};
pub use request::{RegistrationRequest, VerificationRequest};
