//! Issued invoices as listed on the invoices screen.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use inflow_core::{Entity, InvoiceNumber, Money, SearchTerm, Selection, find_by_id};

use crate::draft::InvoiceDraft;
use crate::form::{InvoiceSubmitter, SubmitError};
use crate::totals::compute_totals;
use crate::validation::validation_issues;

/// Invoice status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

/// One row of the invoices list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub number: InvoiceNumber,
    pub client: String,
    pub amount: Money,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub description: String,
}

impl Entity for InvoiceRecord {
    type Id = InvoiceNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}

/// Search box + status selector of the invoices list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceFilter {
    /// Matches client name or invoice number.
    pub search: SearchTerm,
    pub status: Selection<InvoiceStatus>,
}

impl InvoiceFilter {
    pub fn matches(&self, record: &InvoiceRecord) -> bool {
        let number = record.number.to_string();
        self.search.matches_any([record.client.as_str(), number.as_str()])
            && self.status.admits(&record.status)
    }
}

/// Invoice count per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub paid: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// In-memory list of issued invoices, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceRegister {
    records: Vec<InvoiceRecord>,
}

impl InvoiceRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<InvoiceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[InvoiceRecord] {
        &self.records
    }

    pub fn get(&self, number: &InvoiceNumber) -> Option<&InvoiceRecord> {
        find_by_id(&self.records, number)
    }

    /// Records passing `filter`, in list order.
    pub fn filter(&self, filter: &InvoiceFilter) -> Vec<&InvoiceRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.records
            .iter()
            .fold(StatusCounts::default(), |mut counts, record| {
                match record.status {
                    InvoiceStatus::Paid => counts.paid += 1,
                    InvoiceStatus::Pending => counts.pending += 1,
                    InvoiceStatus::Overdue => counts.overdue += 1,
                }
                counts
            })
    }

    /// Issue a pending invoice from a submittable draft.
    ///
    /// The new record is numbered one past the highest existing number and
    /// placed at the top of the list.
    pub fn record(&mut self, draft: &InvoiceDraft) -> Result<InvoiceNumber, SubmitError> {
        if let Some(issue) = validation_issues(draft).first() {
            return Err(SubmitError::Rejected(issue.to_string()));
        }
        let (Some(issue_date), Some(due_date)) = (draft.issue_date(), draft.due_date()) else {
            return Err(SubmitError::Rejected("invoice dates are required".into()));
        };

        let number = InvoiceNumber::next_in(self.records.iter().map(|r| &r.number));
        let description = draft
            .items()
            .iter()
            .find(|item| item.is_complete())
            .map(|item| item.description.trim().to_string())
            .unwrap_or_default();

        self.records.insert(
            0,
            InvoiceRecord {
                number,
                client: draft.client_name().trim().to_string(),
                amount: Money::new(draft.currency(), compute_totals(draft).total),
                status: InvoiceStatus::Pending,
                issue_date,
                due_date,
                description,
            },
        );
        tracing::info!(%number, "invoice recorded");
        Ok(number)
    }
}

impl InvoiceSubmitter for InvoiceRegister {
    fn submit(&mut self, draft: &InvoiceDraft) -> Result<(), SubmitError> {
        self.record(draft).map(|_| ())
    }
}
