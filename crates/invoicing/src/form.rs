//! Invoice creation form session: seed, edit, then submit or dismiss.

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::DraftDefaults;
use crate::draft::{DraftEdit, InvoiceDraft};
use crate::totals::{InvoiceTotals, compute_totals};
use crate::validation::{DraftIssue, validation_issues};

/// Failure reported by the collaborator that receives finished drafts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The receiver refused the draft.
    #[error("invoice rejected: {0}")]
    Rejected(String),

    /// The receiver could not be reached.
    #[error("invoice service unavailable: {0}")]
    Unavailable(String),
}

/// Receiver of finished drafts (the invoice-creation API).
pub trait InvoiceSubmitter {
    fn submit(&mut self, draft: &InvoiceDraft) -> Result<(), SubmitError>;
}

/// Outcome of [`InvoiceForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The draft was handed off and the form was reset.
    Submitted,
    /// Nothing was sent; the draft is unchanged.
    NotSubmittable(Vec<DraftIssue>),
}

/// An open creation form holding the draft being edited.
#[derive(Debug, Clone)]
pub struct InvoiceForm {
    defaults: DraftDefaults,
    today: NaiveDate,
    draft: InvoiceDraft,
}

impl InvoiceForm {
    pub fn open(defaults: DraftDefaults, today: NaiveDate) -> Self {
        Self {
            defaults,
            today,
            draft: InvoiceDraft::seeded(&defaults, today),
        }
    }

    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(&self.draft)
    }

    pub fn issues(&self) -> Vec<DraftIssue> {
        validation_issues(&self.draft)
    }

    pub fn edit(&mut self, edit: DraftEdit) {
        self.draft = self.draft.clone().apply(edit);
    }

    /// Hand the draft to `submitter` if it passes validation.
    ///
    /// On success the form starts over from a seeded draft; on a submitter
    /// error the draft is kept so the user can retry.
    pub fn submit<S>(&mut self, submitter: &mut S) -> Result<Submission, SubmitError>
    where
        S: InvoiceSubmitter + ?Sized,
    {
        let issues = validation_issues(&self.draft);
        if !issues.is_empty() {
            tracing::debug!(?issues, "draft not submittable");
            return Ok(Submission::NotSubmittable(issues));
        }

        if let Err(e) = submitter.submit(&self.draft) {
            tracing::warn!(error = %e, "invoice submission failed; keeping draft");
            return Err(e);
        }

        tracing::info!(
            client = %self.draft.client_name().trim(),
            items = self.draft.items().len(),
            total = self.totals().total,
            "invoice submitted"
        );
        self.draft = InvoiceDraft::seeded(&self.defaults, self.today);
        Ok(Submission::Submitted)
    }

    /// Close the form without submitting; the draft is discarded.
    pub fn dismiss(self) {
        tracing::debug!("invoice form dismissed");
    }
}
