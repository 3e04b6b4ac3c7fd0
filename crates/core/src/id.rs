//! Human-readable sequence identifiers used across the dashboard.
//!
//! Every record kind is numbered with a fixed prefix and a zero-padded
//! sequence (`INV-001`, `CL-001`, `TXN-1001`).

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an issued invoice (`INV-001`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvoiceNumber(u32);

/// Identifier of a client (`CL-001`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientId(u32);

/// Identifier of a payment transaction (`TXN-1001`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransactionId(u32);

macro_rules! impl_sequence_id {
    ($t:ty, $prefix:literal) => {
        impl $t {
            pub fn new(sequence: u32) -> Self {
                Self(sequence)
            }

            /// Identifier one past the highest sequence among `existing`.
            pub fn next_in<'a>(existing: impl IntoIterator<Item = &'a Self>) -> Self {
                let highest = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
                Self(highest.saturating_add(1))
            }

            pub fn sequence(&self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}-{:03}", $prefix, self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s
                    .strip_prefix($prefix)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .ok_or_else(|| {
                        DomainError::invalid_id(format!("{s:?}: expected {}-<number>", $prefix))
                    })?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DomainError::invalid_id(format!(
                        "{s:?}: sequence must be decimal digits"
                    )));
                }
                let sequence = digits
                    .parse::<u32>()
                    .map_err(|e| DomainError::invalid_id(format!("{s:?}: {e}")))?;
                Ok(Self(sequence))
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.to_string()
            }
        }
    };
}

impl_sequence_id!(InvoiceNumber, "INV");
impl_sequence_id!(ClientId, "CL");
impl_sequence_id!(TransactionId, "TXN");
