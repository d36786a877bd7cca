use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use veritag_types::{validate, Warranty};

/// Registration input as received from the routing layer.
///
/// Fields are raw strings; [`RegistrationRequest::violations`] applies the
/// protocol's field-format rules and reports every problem at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub product_id: String,
    pub brand_id: String,
    pub name: String,
    pub serial_number: String,
    /// `YYYY-MM-DD`.
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
    /// Optional binary asset (product image). Arrives out-of-band from the
    /// JSON body, hence excluded from serialization.
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
}

impl RegistrationRequest {
    /// Collect every field-format violation. Empty means valid.
    pub fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        check_required(&mut violations, "Product ID", &self.product_id);
        check_required(&mut violations, "Brand ID", &self.brand_id);
        check_required(&mut violations, "Product name", &self.name);
        check_required(&mut violations, "Serial number", &self.serial_number);
        check_required(&mut violations, "Manufacture date", &self.manufacture_date);

        check_format(&mut violations, "Product ID", &self.product_id, validate::identifier_violation);
        check_format(&mut violations, "Brand ID", &self.brand_id, validate::identifier_violation);
        check_format(&mut violations, "Serial number", &self.serial_number, validate::serial_violation);
        check_format(&mut violations, "Manufacture date", &self.manufacture_date, validate::date_violation);

        if let Some(price) = self.price {
            if let Some(reason) = validate::price_violation(price) {
                violations.push(format!("Price {reason}"));
            }
        }
        if let Some(warranty) = &self.warranty {
            if let Some(reason) = validate::warranty_period_violation(&warranty.period) {
                violations.push(format!("Warranty period {reason}"));
            }
            if let Some(reason) = validate::date_violation(&warranty.start_date) {
                violations.push(format!("Warranty start date {reason}"));
            }
        }

        violations
    }
}

fn check_required(violations: &mut Vec<String>, label: &str, value: &str) {
    if value.is_empty() {
        violations.push(format!("{label} is required"));
    }
}

fn check_format(
    violations: &mut Vec<String>,
    label: &str,
    value: &str,
    checker: fn(&str) -> Option<String>,
) {
    // Format rules only apply to present values; absence is already
    // reported by the required check.
    if !value.is_empty() {
        if let Some(reason) = checker(value) {
            violations.push(format!("{label} {reason}"));
        }
    }
}

/// The tag-side inputs to verification: the claim to be checked.
///
/// Fields are deliberately unvalidated strings — a tampered tag is still a
/// verifiable claim, and the comparisons are exact string equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub brand_id: String,
    pub serial_number: String,
    /// Detached signature, hex.
    pub signature: String,
    /// Public key read off the tag, hex.
    pub tag_public_key: String,
}
