//! Boundary normalization of raw form input.
//!
//! Text typed into numeric and date fields is converted here, before it reaches
//! the arithmetic. Nothing in this module fails: unparseable input becomes zero,
//! NaN ("not a number yet") or an absent date.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Parse a numeric field, coercing anything unusable to `0.0`.
pub fn parse_or_zero(raw: &str) -> f64 {
    finite_or_zero(parse_amount(raw))
}

/// Parse a numeric field, keeping unparseable input as NaN.
///
/// Empty input parses to `0.0`, matching how an emptied number box reads.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// `value` if it is finite, otherwise `0.0`.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Parse a `YYYY-MM-DD` date field; empty or invalid input is "not set".
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Deserialize a number that may be `null` (a non-finite value on the wire).
pub(crate) fn nullable_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
