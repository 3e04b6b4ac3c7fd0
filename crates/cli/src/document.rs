//! Partial draft documents as typed into the form.
//!
//! Every field is optional; missing fields keep the seeded defaults. Numbers
//! may arrive as JSON numbers or as the raw text of an input box. An explicit
//! `null` is kept apart from a missing field: it clears a date and leaves a
//! number unparsed, the same way a serialized draft reads back.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use inflow_core::{Currency, DomainResult};
use inflow_invoicing::{
    DraftDefaults, DraftEdit, DraftUpdate, InvoiceDraft, LineItemPatch, parse_amount, parse_date,
};

/// A numeric form field: a JSON number or the raw text of the input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    pub fn value(&self) -> f64 {
        match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(raw) => parse_amount(raw),
        }
    }
}

/// Value of a present numeric field; `null` is an unparsed number.
fn number_value(input: Option<NumberInput>) -> f64 {
    input.as_ref().map_or(f64::NAN, NumberInput::value)
}

/// Outer `Some` when the field is present, inner `None` when it is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ItemDocument {
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub quantity: Option<Option<NumberInput>>,
    #[serde(default, deserialize_with = "present")]
    pub unit_price: Option<Option<NumberInput>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DraftDocument {
    pub client_name: Option<String>,
    pub client_contact: Option<String>,
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub issue_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub due_date: Option<Option<String>>,
    #[serde(default)]
    pub items: Vec<ItemDocument>,
    #[serde(default, deserialize_with = "present")]
    pub tax_rate_percent: Option<Option<NumberInput>>,
    #[serde(default, deserialize_with = "present")]
    pub discount_percent: Option<Option<NumberInput>>,
    pub notes: Option<String>,
}

impl DraftDocument {
    /// Replay the document as form edits on top of a seeded draft.
    ///
    /// Only an unknown currency code is an error; every other field degrades
    /// the way the form does (unparsed numbers, blank dates).
    pub fn into_draft(self, defaults: &DraftDefaults, today: NaiveDate) -> DomainResult<InvoiceDraft> {
        let mut edits = Vec::new();

        if let Some(name) = self.client_name {
            edits.push(DraftEdit::UpdateField(DraftUpdate::ClientName(name)));
        }
        if let Some(contact) = self.client_contact {
            edits.push(DraftEdit::UpdateField(DraftUpdate::ClientContact(Some(contact))));
        }
        if let Some(code) = self.currency {
            let currency = code.parse::<Currency>()?;
            edits.push(DraftEdit::UpdateField(DraftUpdate::Currency(currency)));
        }
        if let Some(raw) = self.issue_date {
            let date = raw.as_deref().and_then(parse_date);
            edits.push(DraftEdit::UpdateField(DraftUpdate::IssueDate(date)));
        }
        if let Some(raw) = self.due_date {
            let date = raw.as_deref().and_then(parse_date);
            edits.push(DraftEdit::UpdateField(DraftUpdate::DueDate(date)));
        }
        if let Some(rate) = self.tax_rate_percent {
            edits.push(DraftEdit::UpdateField(DraftUpdate::TaxRatePercent(number_value(rate))));
        }
        if let Some(rate) = self.discount_percent {
            edits.push(DraftEdit::UpdateField(DraftUpdate::DiscountPercent(number_value(rate))));
        }
        if let Some(notes) = self.notes {
            edits.push(DraftEdit::UpdateField(DraftUpdate::Notes(Some(notes))));
        }

        for (index, item) in self.items.into_iter().enumerate() {
            if index > 0 {
                edits.push(DraftEdit::AddItem);
            }
            edits.push(DraftEdit::UpdateItem {
                index,
                patch: item.into_patch(),
            });
        }

        Ok(edits
            .into_iter()
            .fold(InvoiceDraft::seeded(defaults, today), InvoiceDraft::apply))
    }
}

impl ItemDocument {
    fn into_patch(self) -> LineItemPatch {
        LineItemPatch {
            description: self.description,
            quantity: self.quantity.map(number_value),
            unit_price: self.unit_price.map(number_value),
        }
    }
}
