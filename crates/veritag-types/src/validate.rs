//! Field-format rules for registration input.
//!
//! Each checker returns `None` when the value is well formed and
//! `Some(violation)` otherwise. Callers collect every violation before
//! failing, so a bad request reports all of its problems at once rather
//! than the first one found.

/// Registry identifiers: 3–20 chars, uppercase letters, digits, underscore.
pub fn identifier_violation(value: &str) -> Option<String> {
    charset_violation(value, |c| {
        c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
    })
}

/// Serial numbers: 3–20 chars, uppercase letters, digits, hyphen.
pub fn serial_violation(value: &str) -> Option<String> {
    charset_violation(value, |c| {
        c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-'
    })
}

fn charset_violation(value: &str, allowed: impl Fn(char) -> bool) -> Option<String> {
    if value.len() < 3 || value.len() > 20 {
        return Some(format!(
            "must be 3-20 characters long, got {}",
            value.len()
        ));
    }
    if let Some(bad) = value.chars().find(|c| !allowed(*c)) {
        return Some(format!("contains disallowed character {bad:?}"));
    }
    None
}

/// Dates: `YYYY-MM-DD`, digits only in the date positions.
pub fn date_violation(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if well_formed {
        None
    } else {
        Some("must be in YYYY-MM-DD format".into())
    }
}

/// Prices: finite, non-negative.
pub fn price_violation(price: f64) -> Option<String> {
    if price.is_finite() && price >= 0.0 {
        None
    } else {
        Some("must be a non-negative number".into())
    }
}

/// Warranty periods: `"<int> year(s)|month(s)|day(s)"`, with the space
/// between count and unit optional.
pub fn warranty_period_violation(period: &str) -> Option<String> {
    let violation = Some(r#"must be in format: "X year(s)", "X month(s)", or "X day(s)""#.into());

    let digits = period.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return violation;
    }
    let unit = period[digits..].trim_start();
    match unit {
        "year" | "years" | "month" | "months" | "day" | "days" => None,
        _ => violation,
    }
}
