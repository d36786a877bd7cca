use serde::{Deserialize, Serialize};
use veritag_types::{ContentId, ProductDocument};

/// Per-step failure messages gathered during verification.
///
/// Populated even when the overall call succeeds: a report with a
/// `blockchain_error` and `using_fallback_data = true` is a valid decision
/// resting on unverified data, and the caller's trust policy decides what
/// that is worth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// Registry ledger failure, if any.
    #[serde(default)]
    pub blockchain_error: Option<String>,
    /// Content store failure, if any.
    #[serde(default)]
    pub store_error: Option<String>,
    /// Signature engine failure (decode errors, not mismatches), if any.
    #[serde(default)]
    pub signature_error: Option<String>,
    /// The exact canonical message the signature was checked against.
    pub message: String,
}

/// The single composite trust report returned by verification.
///
/// The four booleans are always present regardless of which steps failed.
/// There is no top-level verdict: trust is the conjunction the caller
/// chooses to require, typically all four flags plus
/// `using_fallback_data == false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    /// Content identifier resolved from the ledger (or fallback record).
    pub content_id: ContentId,
    /// Public key bound on the ledger at registration, hex.
    pub public_key: String,
    /// RFC 3339 registration time from the ledger record.
    pub registration_time: String,
    pub is_active: bool,
    /// The fetched document, or a labeled stand-in when the store failed.
    pub document: ProductDocument,
    /// Whether the tag's signature verifies over the canonical message
    /// under the tag's claimed public key.
    pub signature_valid: bool,
    pub brand_id_match: bool,
    pub serial_number_match: bool,
    pub product_id_match: bool,
    /// Gateway retrieval URL for the document.
    pub content_url: String,
    /// RFC 3339 time of this verification.
    pub verified_at: String,
    /// True when any answer above rests on fallback or placeholder data
    /// rather than ledger- and store-backed truth.
    pub using_fallback_data: bool,
    pub diagnostics: Diagnostics,
}

impl VerificationReport {
    /// Convenience conjunction of the four verification flags. Ignores
    /// `using_fallback_data`; callers with stricter policies must check it.
    pub fn all_checks_passed(&self) -> bool {
        self.signature_valid
            && self.brand_id_match
            && self.serial_number_match
            && self.product_id_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_flags_and_diagnostics() {
        let report = VerificationReport {
            content_id: ContentId::new("Qm...test"),
            public_key: "ab".repeat(32),
            registration_time: "2024-05-01T00:00:00+00:00".into(),
            is_active: true,
            document: ProductDocument::unknown("PROD001", "2024-05-01T00:00:00+00:00".into()),
            signature_valid: false,
            brand_id_match: false,
            serial_number_match: false,
            product_id_match: true,
            content_url: "https://gateway.pinata.cloud/ipfs/Qm...test".into(),
            verified_at: "2024-05-02T00:00:00+00:00".into(),
            using_fallback_data: false,
            diagnostics: Diagnostics {
                store_error: Some("content store unavailable: offline".into()),
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["signatureValid"], false);
        assert_eq!(json["productIdMatch"], true);
        assert_eq!(json["usingFallbackData"], false);
        assert!(json["diagnostics"]["storeError"].as_str().is_some());
        assert!(json["diagnostics"]["blockchainError"].is_null());
        assert!(!report.all_checks_passed());
    }
}
