//! Support library for the `inflow-quote` binary.

pub mod document;
pub mod report;

pub use document::{DraftDocument, ItemDocument, NumberInput};
pub use report::QuoteReport;
