//! Submission gate for drafts.
//!
//! Validation is not an error path: the form disables its submit action while
//! any issue is reported.

use serde::Serialize;
use thiserror::Error;

use crate::draft::InvoiceDraft;

/// Reason a draft cannot be submitted yet.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftIssue {
    #[error("client name is required")]
    MissingClientName,

    #[error("issue date is required")]
    MissingIssueDate,

    #[error("due date is required")]
    MissingDueDate,

    #[error("due date is before the issue date")]
    DueBeforeIssue,

    /// Only one complete row is needed; partially filled rows are tolerated.
    #[error("at least one item needs a description, a positive quantity and a non-negative price")]
    NoValidItem,
}

/// All issues blocking submission, in form order.
pub fn validation_issues(draft: &InvoiceDraft) -> Vec<DraftIssue> {
    let mut issues = Vec::new();

    if draft.client_name().trim().is_empty() {
        issues.push(DraftIssue::MissingClientName);
    }

    match (draft.issue_date(), draft.due_date()) {
        (Some(issue), Some(due)) => {
            if due < issue {
                issues.push(DraftIssue::DueBeforeIssue);
            }
        }
        (issue, due) => {
            if issue.is_none() {
                issues.push(DraftIssue::MissingIssueDate);
            }
            if due.is_none() {
                issues.push(DraftIssue::MissingDueDate);
            }
        }
    }

    if !draft.items().iter().any(|item| item.is_complete()) {
        issues.push(DraftIssue::NoValidItem);
    }

    issues
}

/// True when nothing blocks submission.
pub fn is_submittable(draft: &InvoiceDraft) -> bool {
    validation_issues(draft).is_empty()
}
