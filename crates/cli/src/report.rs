//! Quote output: totals block plus the submission verdict.

use serde::Serialize;

use inflow_invoicing::{DraftIssue, InvoiceDraft, InvoiceTotals, compute_totals, validation_issues};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    #[serde(flatten)]
    pub totals: InvoiceTotals,
    pub submittable: bool,
    pub issues: Vec<DraftIssue>,
    #[serde(skip)]
    display: String,
}

impl QuoteReport {
    pub fn for_draft(draft: &InvoiceDraft) -> Self {
        let totals = compute_totals(draft);
        let issues = validation_issues(draft);
        Self {
            display: totals.display(draft.currency()).to_string(),
            totals,
            submittable: issues.is_empty(),
            issues,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl core::fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", self.display)?;
        if self.submittable {
            write!(f, "submittable: yes")
        } else {
            write!(f, "submittable: no")?;
            for issue in &self.issues {
                write!(f, "\n- {issue}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use inflow_invoicing::{DraftDefaults, DraftUpdate, LineItemPatch};

    fn seeded() -> InvoiceDraft {
        InvoiceDraft::seeded(
            &DraftDefaults::default(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn text_report_for_complete_draft() {
        let draft = seeded()
            .update_field(DraftUpdate::ClientName("Acme".into()))
            .update_item(
                0,
                &LineItemPatch::default()
                    .description("Design")
                    .quantity(2.0)
                    .unit_price(100.0),
            )
            .update_field(DraftUpdate::TaxRatePercent(10.0));

        let text = QuoteReport::for_draft(&draft).to_string();
        assert_eq!(
            text,
            "Subtotal  TSH 200.00\n\
             Tax       TSH 20.00\n\
             Discount  - TSH 0.00\n\
             Total     TSH 220.00\n\
             submittable: yes"
        );
    }

    #[test]
    fn text_report_lists_issues() {
        let text = QuoteReport::for_draft(&seeded()).to_string();
        assert!(text.ends_with(
            "submittable: no\n\
             - client name is required\n\
             - at least one item needs a description, a positive quantity and a non-negative price"
        ));
    }

    #[test]
    fn json_report_flattens_totals() {
        let json = QuoteReport::for_draft(&seeded()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["subtotal"], 0.0);
        assert_eq!(value["taxAmount"], 0.0);
        assert_eq!(value["submittable"], false);
        assert_eq!(value["issues"][0], "missing_client_name");
        assert!(value.get("display").is_none());
    }
}
