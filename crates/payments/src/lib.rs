//! Payments domain module.
//!
//! Payment transactions received against invoices and the payments list
//! screen (filtering and gross/fee/net totals). Payment processing itself is
//! out of scope; transactions arrive as plain records.

pub mod transaction;

pub use transaction::{
    PaymentFilter, PaymentMethod, PaymentStatus, PaymentTotals, Transaction, filter, totals,
};
