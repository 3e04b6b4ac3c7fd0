//! Value objects: equality by value, not identity.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances with the same attribute
/// values are the same value. To "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Currencies an invoice can be issued in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    #[default]
    Tsh,
    Eur,
    Gbp,
    Inr,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Tsh,
        Currency::Eur,
        Currency::Gbp,
        Currency::Inr,
    ];

    /// Upper-case ISO-style code used as the display prefix.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Tsh => "TSH",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown currency {code:?} (expected one of USD, TSH, EUR, GBP, INR)"
                ))
            })
    }
}

impl ValueObject for Currency {}

/// A monetary amount tagged with its currency.
///
/// Amounts are plain `f64` values; formatting is literal code prefixing, no
/// locale-specific symbols.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub currency: Currency,
    pub amount: f64,
}

impl Money {
    pub fn new(currency: Currency, amount: f64) -> Self {
        Self { currency, amount }
    }

    /// `"<code> <amount>"` with thousands separators and at most two
    /// fraction digits, trailing zeros dropped (`TSH 2,475`, `USD 1,234.5`).
    pub fn grouped(&self) -> String {
        let fixed = format!("{:.2}", display_amount(self.amount));
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let (sign, digits) = match int_part.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", int_part),
        };

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let frac = frac_part.trim_end_matches('0');
        if frac.is_empty() {
            format!("{} {sign}{grouped}", self.currency)
        } else {
            format!("{} {sign}{grouped}.{frac}", self.currency)
        }
    }
}

/// Amount rounded to cents, half away from zero (`0.125` shows as `0.13`).
///
/// Non-finite amounts render as zero; anything that rounds to zero renders
/// unsigned.
fn display_amount(amount: f64) -> f64 {
    let cents = (amount * 100.0).round();
    if !cents.is_finite() || cents == 0.0 {
        0.0
    } else {
        cents / 100.0
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {:.2}", self.currency, display_amount(self.amount))
    }
}

impl ValueObject for Money {}
