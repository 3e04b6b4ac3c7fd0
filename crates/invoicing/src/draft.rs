use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use inflow_core::{Currency, ValueObject};

use crate::config::DraftDefaults;
use crate::numeric::nullable_number;

/// One row of the invoice form.
///
/// `quantity` and `unit_price` may hold NaN while the user is mid-edit; the
/// totals treat any non-finite value as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    #[serde(deserialize_with = "nullable_number")]
    pub quantity: f64,
    #[serde(deserialize_with = "nullable_number")]
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// The row appended by "Add Item": no description, one unit, free.
    pub fn blank() -> Self {
        Self::new(String::new(), 1.0, 0.0)
    }

    /// A row counts toward submission when it is described, has a positive
    /// quantity and a non-negative price.
    pub fn is_complete(&self) -> bool {
        !self.description.trim().is_empty() && self.quantity > 0.0 && self.unit_price >= 0.0
    }

    fn merge(&mut self, patch: &LineItemPatch) {
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }
    }
}

impl ValueObject for LineItem {}

/// Partial update of a line item; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemPatch {
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
}

impl LineItemPatch {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = Some(unit_price);
        self
    }
}

/// Replacement of a single top-level draft field.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftUpdate {
    ClientName(String),
    ClientContact(Option<String>),
    Currency(Currency),
    IssueDate(Option<NaiveDate>),
    DueDate(Option<NaiveDate>),
    TaxRatePercent(f64),
    DiscountPercent(f64),
    Notes(Option<String>),
}

/// Edit command fed by the form collaborator, one per user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    AddItem,
    RemoveItem { index: usize },
    UpdateItem { index: usize, patch: LineItemPatch },
    UpdateField(DraftUpdate),
}

/// Invoice being composed in the creation form.
///
/// Every edit consumes the draft and returns the next one; totals are never
/// stored, only derived (see [`crate::totals::compute_totals`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    client_name: String,
    client_contact: Option<String>,
    currency: Currency,
    issue_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    #[serde(default = "blank_items", deserialize_with = "non_empty_items")]
    items: Vec<LineItem>,
    #[serde(default, deserialize_with = "nullable_number")]
    tax_rate_percent: f64,
    #[serde(default, deserialize_with = "nullable_number")]
    discount_percent: f64,
    notes: Option<String>,
}

impl InvoiceDraft {
    /// Fresh draft as shown when the creation form opens.
    pub fn seeded(defaults: &DraftDefaults, today: NaiveDate) -> Self {
        Self {
            client_name: String::new(),
            client_contact: None,
            currency: defaults.currency,
            issue_date: Some(today),
            due_date: Some(defaults.due_date_for(today)),
            items: blank_items(),
            tax_rate_percent: 0.0,
            discount_percent: 0.0,
            notes: None,
        }
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn client_contact(&self) -> Option<&str> {
        self.client_contact.as_deref()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn issue_date(&self) -> Option<NaiveDate> {
        self.issue_date
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Line items in display order; never empty.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn tax_rate_percent(&self) -> f64 {
        self.tax_rate_percent
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Apply one edit command.
    pub fn apply(self, edit: DraftEdit) -> Self {
        match edit {
            DraftEdit::AddItem => self.add_item(),
            DraftEdit::RemoveItem { index } => self.remove_item(index),
            DraftEdit::UpdateItem { index, patch } => self.update_item(index, &patch),
            DraftEdit::UpdateField(update) => self.update_field(update),
        }
    }

    /// Append a blank line item.
    pub fn add_item(mut self) -> Self {
        self.items.push(LineItem::blank());
        self
    }

    /// Remove the item at `index`.
    ///
    /// Invariant: the last remaining item is never removed. Out-of-range indices
    /// are ignored.
    pub fn remove_item(mut self, index: usize) -> Self {
        if self.items.len() == 1 {
            tracing::debug!(index, "ignoring removal of the only line item");
            return self;
        }
        if index >= self.items.len() {
            tracing::debug!(index, len = self.items.len(), "ignoring removal out of range");
            return self;
        }
        self.items.remove(index);
        self
    }

    /// Merge `patch` into the item at `index`; out-of-range indices are ignored.
    pub fn update_item(mut self, index: usize, patch: &LineItemPatch) -> Self {
        match self.items.get_mut(index) {
            Some(item) => item.merge(patch),
            None => {
                tracing::debug!(index, len = self.items.len(), "ignoring update out of range");
            }
        }
        self
    }

    pub fn update_field(mut self, update: DraftUpdate) -> Self {
        match update {
            DraftUpdate::ClientName(name) => self.client_name = name,
            DraftUpdate::ClientContact(contact) => self.client_contact = contact,
            DraftUpdate::Currency(currency) => self.currency = currency,
            DraftUpdate::IssueDate(date) => self.issue_date = date,
            DraftUpdate::DueDate(date) => self.due_date = date,
            DraftUpdate::TaxRatePercent(rate) => self.tax_rate_percent = rate,
            DraftUpdate::DiscountPercent(rate) => self.discount_percent = rate,
            DraftUpdate::Notes(notes) => self.notes = notes,
        }
        self
    }
}

fn blank_items() -> Vec<LineItem> {
    vec![LineItem::blank()]
}

/// An empty `items` array on the wire still yields the one blank row.
fn non_empty_items<'de, D>(deserializer: D) -> Result<Vec<LineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut items = Vec::<LineItem>::deserialize(deserializer)?;
    if items.is_empty() {
        items.push(LineItem::blank());
    }
    Ok(items)
}
