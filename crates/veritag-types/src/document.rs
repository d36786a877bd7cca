use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Warranty terms attached to a product document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warranty {
    /// `"<int> year(s)|month(s)|day(s)"`.
    pub period: String,
    /// `YYYY-MM-DD`.
    pub start_date: String,
}

/// Off-chain product metadata, stored once per content identifier.
///
/// Identity fields are plain strings rather than validated identifier types:
/// degraded-mode documents synthesized by the verification pipeline carry
/// sentinel values (`"Unknown (store error)"`) that no identifier rule
/// admits, and a fetched document is untrusted input to be cross-checked,
/// not a source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    pub product_id: String,
    pub brand_id: String,
    pub name: String,
    pub serial_number: String,
    pub manufacture_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specifications: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty: Option<Warranty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Server-stamped at registration time, RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl ProductDocument {
    /// Minimal placeholder used when verification runs on fallback registry
    /// data and the content store is also unreachable. Never presented as
    /// chain-backed truth; the report's fallback flag covers it.
    pub fn placeholder(product_id: &str, brand_id: &str, registration_date: String) -> Self {
        Self {
            product_id: product_id.to_string(),
            brand_id: brand_id.to_string(),
            name: format!("{product_id} (placeholder)"),
            serial_number: format!("SN-{product_id}"),
            manufacture_date: "1970-01-01".into(),
            description: Some("Placeholder document substituted for unreachable content store".into()),
            model: None,
            price: None,
            specifications: BTreeMap::new(),
            warranty: None,
            image_url: None,
            registration_date: Some(registration_date),
            last_updated: None,
        }
    }

    /// Best-effort stand-in when the content store fetch fails outside
    /// fallback mode. Field values are sentinels that match nothing, so
    /// every cross-check against a real tag reports a mismatch.
    pub fn unknown(product_id: &str, registration_date: String) -> Self {
        Self {
            product_id: product_id.to_string(),
            brand_id: "Unknown (store error)".into(),
            name: "Unknown Product".into(),
            serial_number: "Unknown".into(),
            manufacture_date: "Unknown".into(),
            description: Some("Unable to fetch product details from the content store".into()),
            model: None,
            price: None,
            specifications: BTreeMap::new(),
            warranty: None,
            image_url: None,
            registration_date: Some(registration_date),
            last_updated: None,
        }
    }
}
