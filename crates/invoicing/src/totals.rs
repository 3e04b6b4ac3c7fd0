//! Derived monetary totals of a draft.

use serde::Serialize;

use inflow_core::{Currency, Money};

use crate::draft::{InvoiceDraft, LineItem};
use crate::numeric::finite_or_zero;

/// Subtotal, tax, discount and total of a draft, always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub total: f64,
}

/// Recompute every total from scratch.
///
/// Non-finite quantities, prices and rates count as zero; the total is
/// clamped at zero.
pub fn compute_totals(draft: &InvoiceDraft) -> InvoiceTotals {
    let subtotal = finite_or_zero(draft.items().iter().map(line_amount).sum());
    let tax_amount = finite_or_zero(subtotal * (finite_or_zero(draft.tax_rate_percent()) / 100.0));
    let discount_amount =
        finite_or_zero(subtotal * (finite_or_zero(draft.discount_percent()) / 100.0));
    let total = finite_or_zero(subtotal + tax_amount - discount_amount).max(0.0);

    InvoiceTotals {
        subtotal,
        tax_amount,
        discount_amount,
        total,
    }
}

/// `quantity × unit_price`, or zero when either side is not a number.
pub fn line_amount(item: &LineItem) -> f64 {
    if item.quantity.is_finite() && item.unit_price.is_finite() {
        finite_or_zero(item.quantity * item.unit_price)
    } else {
        0.0
    }
}

impl InvoiceTotals {
    /// Render the totals block shown under the line items.
    pub fn display(&self, currency: Currency) -> TotalsDisplay {
        TotalsDisplay {
            subtotal: Money::new(currency, self.subtotal).to_string(),
            tax: Money::new(currency, self.tax_amount).to_string(),
            discount: format!("- {}", Money::new(currency, self.discount_amount)),
            total: Money::new(currency, self.total).to_string(),
        }
    }
}

/// Pre-formatted totals lines (`"USD 220.00"`; discount as `"- USD 0.00"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsDisplay {
    pub subtotal: String,
    pub tax: String,
    pub discount: String,
    pub total: String,
}

impl core::fmt::Display for TotalsDisplay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Subtotal  {}", self.subtotal)?;
        writeln!(f, "Tax       {}", self.tax)?;
        writeln!(f, "Discount  {}", self.discount)?;
        write!(f, "Total     {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DraftDefaults;
    use crate::draft::{DraftUpdate, LineItemPatch};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn draft_with(items: &[(f64, f64)], tax: f64, discount: f64) -> InvoiceDraft {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut draft = InvoiceDraft::seeded(&DraftDefaults::default(), today);
        for _ in 1..items.len() {
            draft = draft.add_item();
        }
        for (i, (quantity, unit_price)) in items.iter().enumerate() {
            draft = draft.update_item(
                i,
                &LineItemPatch::default()
                    .description(format!("item {i}"))
                    .quantity(*quantity)
                    .unit_price(*unit_price),
            );
        }
        draft
            .update_field(DraftUpdate::TaxRatePercent(tax))
            .update_field(DraftUpdate::DiscountPercent(discount))
    }

    #[test]
    fn design_work_with_ten_percent_tax() {
        let totals = compute_totals(&draft_with(&[(2.0, 100.0)], 10.0, 0.0));
        assert_eq!(
            totals,
            InvoiceTotals {
                subtotal: 200.0,
                tax_amount: 20.0,
                discount_amount: 0.0,
                total: 220.0,
            }
        );
    }

    #[test]
    fn unparsed_quantity_contributes_nothing() {
        let totals = compute_totals(&draft_with(&[(f64::NAN, 50.0), (3.0, 10.0)], 5.0, 0.0));
        assert_eq!(totals.subtotal, 30.0);
        assert_eq!(totals.tax_amount, 1.5);
        assert!(totals.total.is_finite());
        assert_eq!(totals.total, 31.5);
    }

    #[test]
    fn non_finite_rates_count_as_zero() {
        let totals = compute_totals(&draft_with(&[(1.0, 80.0)], f64::NAN, f64::INFINITY));
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.discount_amount, 0.0);
        assert_eq!(totals.total, 80.0);
    }

    #[test]
    fn large_discount_clamps_total_at_zero() {
        let totals = compute_totals(&draft_with(&[(1.0, 100.0)], 0.0, 150.0));
        assert_eq!(totals.discount_amount, 150.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn overflowing_line_amount_counts_as_zero() {
        let totals = compute_totals(&draft_with(&[(1e200, 1e200), (1.0, 5.0)], 0.0, 0.0));
        assert_eq!(totals.subtotal, 5.0);
    }

    #[test]
    fn display_prefixes_currency_code() {
        let totals = compute_totals(&draft_with(&[(2.0, 100.0)], 10.0, 5.0));
        let shown = totals.display(Currency::Usd);
        assert_eq!(shown.subtotal, "USD 200.00");
        assert_eq!(shown.tax, "USD 20.00");
        assert_eq!(shown.discount, "- USD 10.00");
        assert_eq!(shown.total, "USD 210.00");
        assert!(shown.to_string().ends_with("Total     USD 210.00"));
    }

    #[test]
    fn half_cent_tax_rounds_up_on_display() {
        let totals = compute_totals(&draft_with(&[(1.0, 5.0)], 2.5, 0.0));
        let shown = totals.display(Currency::Tsh);
        assert_eq!(shown.tax, "TSH 0.13");
        assert_eq!(shown.total, "TSH 5.13");
    }

    fn amount() -> impl Strategy<Value = f64> {
        prop_oneof![
            8 => -1_000.0f64..1_000_000.0,
            1 => Just(f64::NAN),
            1 => Just(f64::INFINITY),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Taxes and discounts never drive the total below zero.
        #[test]
        fn total_is_never_negative(
            items in prop::collection::vec((amount(), amount()), 1..8),
            tax in amount(),
            discount in amount(),
        ) {
            let totals = compute_totals(&draft_with(&items, tax, discount));
            prop_assert!(totals.total >= 0.0);
            prop_assert!(totals.subtotal.is_finite());
            prop_assert!(totals.tax_amount.is_finite());
            prop_assert!(totals.discount_amount.is_finite());
            prop_assert!(totals.total.is_finite());
        }

        #[test]
        fn without_rates_total_equals_non_negative_subtotal(
            items in prop::collection::vec((0.0f64..1_000.0, 0.0f64..10_000.0), 1..8),
        ) {
            let totals = compute_totals(&draft_with(&items, 0.0, 0.0));
            prop_assert_eq!(totals.total, totals.subtotal);
        }

        #[test]
        fn recomputation_is_idempotent(
            items in prop::collection::vec((amount(), amount()), 1..8),
            tax in amount(),
            discount in amount(),
        ) {
            let draft = draft_with(&items, tax, discount);
            prop_assert_eq!(compute_totals(&draft), compute_totals(&draft));
        }
    }
}
