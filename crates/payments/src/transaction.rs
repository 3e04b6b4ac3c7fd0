use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use inflow_core::{
    Currency, Entity, InvoiceNumber, Money, SearchTerm, Selection, TransactionId,
};

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    BankTransfer,
    MobileMoney,
}

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Succeeded,
    Pending,
    Failed,
}

/// A payment received against an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub invoice_number: InvoiceNumber,
    pub client: String,
    /// Gross amount charged.
    pub amount: f64,
    /// Processing fee withheld.
    pub fee: f64,
    pub net: f64,
    pub currency: Currency,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub date: NaiveDate,
    pub reference: String,
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Search box, method selector and the "paid only" switch of the payments list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentFilter {
    /// Matches client, invoice number, transaction id or reference.
    pub search: SearchTerm,
    pub method: Selection<PaymentMethod>,
    /// Keep only succeeded payments.
    pub paid_only: bool,
}

impl Default for PaymentFilter {
    fn default() -> Self {
        Self {
            search: SearchTerm::default(),
            method: Selection::All,
            paid_only: true,
        }
    }
}

impl PaymentFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        let invoice = tx.invoice_number.to_string();
        let id = tx.id.to_string();
        let fields = [
            tx.client.as_str(),
            invoice.as_str(),
            id.as_str(),
            tx.reference.as_str(),
        ];
        self.search.matches_any(fields)
            && self.method.admits(&tx.method)
            && (!self.paid_only || tx.status == PaymentStatus::Succeeded)
    }
}

/// Transactions passing `filter`, in list order.
pub fn filter<'a>(transactions: &'a [Transaction], filter: &PaymentFilter) -> Vec<&'a Transaction> {
    transactions.iter().filter(|tx| filter.matches(tx)).collect()
}

/// Sums shown above the payments table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentTotals {
    pub gross: f64,
    pub fees: f64,
    pub net: f64,
    /// Currency of the first listed transaction (TSH when empty).
    pub currency: Currency,
}

impl PaymentTotals {
    pub fn gross_money(&self) -> Money {
        Money::new(self.currency, self.gross)
    }

    pub fn fees_money(&self) -> Money {
        Money::new(self.currency, self.fees)
    }

    pub fn net_money(&self) -> Money {
        Money::new(self.currency, self.net)
    }
}

/// Gross, fee and net sums over `transactions`.
pub fn totals<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> PaymentTotals {
    let mut iter = transactions.into_iter().peekable();
    let currency = iter.peek().map_or(Currency::Tsh, |tx| tx.currency);
    iter.fold(
        PaymentTotals {
            gross: 0.0,
            fees: 0.0,
            net: 0.0,
            currency,
        },
        |mut acc, tx| {
            acc.gross += tx.amount;
            acc.fees += tx.fee;
            acc.net += tx.net;
            acc
        },
    )
}
