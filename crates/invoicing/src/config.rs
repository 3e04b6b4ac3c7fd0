//! Seed values for new drafts, configurable through the environment.

use chrono::{Days, NaiveDate};

use inflow_core::Currency;

pub const DEFAULT_CURRENCY_VAR: &str = "INFLOW_DEFAULT_CURRENCY";
pub const DUE_IN_DAYS_VAR: &str = "INFLOW_DUE_IN_DAYS";

/// Values a freshly opened invoice form starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftDefaults {
    pub currency: Currency,
    /// Payment term: due date = issue date + this many days.
    pub due_in_days: u32,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            currency: Currency::Tsh,
            due_in_days: 7,
        }
    }
}

impl DraftDefaults {
    /// Read `INFLOW_DEFAULT_CURRENCY` / `INFLOW_DUE_IN_DAYS`, falling back to
    /// the built-in defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DraftDefaults::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut defaults = Self::default();

        if let Some(raw) = lookup(DEFAULT_CURRENCY_VAR) {
            match raw.parse::<Currency>() {
                Ok(currency) => defaults.currency = currency,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "{DEFAULT_CURRENCY_VAR} invalid; using {}",
                    defaults.currency
                ),
            }
        }

        if let Some(raw) = lookup(DUE_IN_DAYS_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(days) => defaults.due_in_days = days,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "{DUE_IN_DAYS_VAR} invalid; using {}",
                    defaults.due_in_days
                ),
            }
        }

        defaults
    }

    /// Due date for an invoice issued on `issue_date`.
    ///
    /// Saturates at the issue date if the term would overflow the calendar.
    pub fn due_date_for(&self, issue_date: NaiveDate) -> NaiveDate {
        issue_date
            .checked_add_days(Days::new(u64::from(self.due_in_days)))
            .unwrap_or(issue_date)
    }
}
