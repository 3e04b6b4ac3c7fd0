//! `inflow-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the invoicing,
//! client and payment modules (no IO, no UI concerns).

pub mod entity;
pub mod error;
pub mod filter;
pub mod id;
pub mod value_object;

pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use filter::{SearchTerm, Selection};
pub use id::{ClientId, InvoiceNumber, TransactionId};
pub use value_object::{Currency, Money, ValueObject};
