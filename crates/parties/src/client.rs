use serde::{Deserialize, Serialize};

use inflow_core::{
    ClientId, Currency, DomainError, DomainResult, Entity, SearchTerm, Selection, find_by_id,
};

/// Client status lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

/// Values captured by the "New Client" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: ClientStatus,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl ClientForm {
    /// Name and email are required; everything else is optional.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("client name cannot be empty"));
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::validation("client email cannot be empty"));
        }
        Ok(())
    }
}

/// A client with its billing profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: ClientStatus,
    pub address: Option<String>,
    pub invoices_count: u32,
    pub total_billed: f64,
    pub currency: Currency,
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Search box + status selector of the clients list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    /// Matches name, email, company or client id.
    pub search: SearchTerm,
    pub status: Selection<ClientStatus>,
}

impl ClientFilter {
    pub fn matches(&self, client: &Client) -> bool {
        let id = client.id.to_string();
        let fields = [
            client.name.as_str(),
            client.email.as_str(),
            client.company.as_deref().unwrap_or(""),
            id.as_str(),
        ];
        self.search.matches_any(fields) && self.status.admits(&client.status)
    }
}

/// Header cards of the clients screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub total_billed: f64,
    pub currency: Currency,
}

/// In-memory client list, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientDirectory {
    clients: Vec<Client>,
}

impl ClientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_clients(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn get(&self, id: &ClientId) -> Option<&Client> {
        find_by_id(&self.clients, id)
    }

    /// Create a client from a valid form and put it at the top of the list.
    ///
    /// New clients start with no invoices, nothing billed, billing in TSH.
    pub fn add(&mut self, form: ClientForm) -> DomainResult<ClientId> {
        form.validate()?;

        let id = ClientId::next_in(self.clients.iter().map(|c| &c.id));
        let client = Client {
            id,
            name: form.name,
            email: form.email,
            phone: form.phone,
            company: form.company,
            status: form.status,
            address: form.address,
            invoices_count: 0,
            total_billed: 0.0,
            currency: Currency::Tsh,
        };
        self.clients.insert(0, client);
        tracing::info!(%id, "client added");
        Ok(id)
    }

    /// Account one more issued invoice of `amount` to a client.
    pub fn record_invoice(&mut self, id: &ClientId, amount: f64) -> DomainResult<()> {
        let client = self
            .clients
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(DomainError::not_found)?;
        client.invoices_count = client.invoices_count.saturating_add(1);
        if amount.is_finite() {
            client.total_billed += amount;
        }
        Ok(())
    }

    /// Clients passing `filter`, in list order.
    pub fn filter(&self, filter: &ClientFilter) -> Vec<&Client> {
        self.clients.iter().filter(|c| filter.matches(c)).collect()
    }

    pub fn summary(&self) -> ClientSummary {
        let total = self.clients.len();
        let active = self
            .clients
            .iter()
            .filter(|c| c.status == ClientStatus::Active)
            .count();
        ClientSummary {
            total,
            active,
            inactive: total - active,
            total_billed: self.clients.iter().map(|c| c.total_billed).sum(),
            currency: self.clients.first().map_or(Currency::Tsh, |c| c.currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(seq: u32, name: &str, email: &str, company: &str, status: ClientStatus) -> Client {
        Client {
            id: ClientId::new(seq),
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            company: Some(company.to_string()),
            status,
            address: None,
            invoices_count: seq,
            total_billed: 1000.0 * seq as f64,
            currency: Currency::Tsh,
        }
    }

    fn directory() -> ClientDirectory {
        ClientDirectory::from_clients(vec![
            client(1, "Acme Corporation", "billing@acme.com", "Acme", ClientStatus::Active),
            client(2, "TechStart Inc", "ap@techstart.io", "TechStart", ClientStatus::Inactive),
            client(3, "Creative Agency", "pay@creative.agency", "Creative", ClientStatus::Active),
        ])
    }

    fn form(name: &str, email: &str) -> ClientForm {
        ClientForm {
            name: name.to_string(),
            email: email.to_string(),
            ..ClientForm::default()
        }
    }

    fn ids(clients: &[&Client]) -> Vec<u32> {
        clients.iter().map(|c| c.id.sequence()).collect()
    }

    #[test]
    fn form_requires_name_and_email() {
        assert!(form("Jane Doe", "jane@example.com").is_valid());
        assert!(!form("  ", "jane@example.com").is_valid());
        assert!(!form("Jane Doe", "").is_valid());
    }

    #[test]
    fn add_prepends_with_next_id() {
        let mut dir = directory();
        let id = dir.add(form("Startup Hub", "hello@startuphub.co")).unwrap();

        assert_eq!(id.to_string(), "CL-004");
        let first = &dir.clients()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.invoices_count, 0);
        assert_eq!(first.total_billed, 0.0);
        assert_eq!(first.currency, Currency::Tsh);
        assert_eq!(first.status, ClientStatus::Active);
    }

    #[test]
    fn add_rejects_invalid_form() {
        let mut dir = ClientDirectory::new();
        let err = dir.add(form("Jane", " ")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("email")));
        assert!(dir.clients().is_empty());
    }

    #[test]
    fn search_covers_name_email_company_and_id() {
        let dir = directory();
        let by = |term: &str| {
            let filter = ClientFilter {
                search: SearchTerm::new(term),
                ..ClientFilter::default()
            };
            ids(&dir.filter(&filter))
        };
        assert_eq!(by("acme"), vec![1]);
        assert_eq!(by("TECHSTART.IO"), vec![2]);
        assert_eq!(by("creative"), vec![3]);
        assert_eq!(by("cl-002"), vec![2]);
        assert_eq!(by(""), vec![1, 2, 3]);
        assert!(by("nobody").is_empty());
    }

    #[test]
    fn status_filter_narrows_results() {
        let dir = directory();
        let filter = ClientFilter {
            status: Selection::Only(ClientStatus::Active),
            ..ClientFilter::default()
        };
        assert_eq!(ids(&dir.filter(&filter)), vec![1, 3]);
    }

    #[test]
    fn summary_counts_and_sums() {
        let summary = directory().summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.inactive, 1);
        assert_eq!(summary.total_billed, 6000.0);
        assert_eq!(summary.currency, Currency::Tsh);
    }

    #[test]
    fn empty_directory_summary_defaults_to_tsh() {
        let summary = ClientDirectory::new().summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.total_billed, 0.0);
        assert_eq!(summary.currency, Currency::Tsh);
    }

    #[test]
    fn record_invoice_updates_billing_profile() {
        let mut dir = directory();
        dir.record_invoice(&ClientId::new(2), 480.0).unwrap();
        let client = dir.get(&ClientId::new(2)).unwrap();
        assert_eq!(client.invoices_count, 3);
        assert_eq!(client.total_billed, 2480.0);

        let err = dir.record_invoice(&ClientId::new(42), 1.0).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn client_serializes_with_display_id() {
        let json = serde_json::to_value(&directory().clients()[0]).unwrap();
        assert_eq!(json["id"], "CL-001");
        assert_eq!(json["status"], "active");
        assert_eq!(json["invoicesCount"], 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 64,
                ..ProptestConfig::default()
            })]

            /// Active and inactive always partition the directory.
            #[test]
            fn summary_partitions_clients(
                statuses in prop::collection::vec(any::<bool>(), 0..20)
            ) {
                let mut dir = ClientDirectory::new();
                for (i, active) in statuses.iter().enumerate() {
                    let mut f = form(&format!("client {i}"), &format!("c{i}@example.com"));
                    f.status = if *active { ClientStatus::Active } else { ClientStatus::Inactive };
                    dir.add(f).unwrap();
                }
                let summary = dir.summary();
                prop_assert_eq!(summary.total, statuses.len());
                prop_assert_eq!(summary.active + summary.inactive, summary.total);
                prop_assert_eq!(summary.active, statuses.iter().filter(|a| **a).count());
            }
        }
    }
}
