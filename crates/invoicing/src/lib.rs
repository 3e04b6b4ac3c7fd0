//! Invoicing domain module.
//!
//! The invoice computation engine (drafts, totals, submission gate) plus the
//! creation form session and the list of issued invoices. Pure, synchronous
//! domain logic: no IO, no UI, no storage.

pub mod config;
pub mod draft;
pub mod form;
pub mod numeric;
pub mod register;
pub mod totals;
pub mod validation;

pub use config::DraftDefaults;
pub use draft::{DraftEdit, DraftUpdate, InvoiceDraft, LineItem, LineItemPatch};
pub use form::{InvoiceForm, InvoiceSubmitter, SubmitError, Submission};
pub use numeric::{parse_amount, parse_date, parse_or_zero};
pub use register::{InvoiceFilter, InvoiceRecord, InvoiceRegister, InvoiceStatus, StatusCounts};
pub use totals::{InvoiceTotals, TotalsDisplay, compute_totals};
pub use validation::{DraftIssue, is_submittable, validation_issues};
