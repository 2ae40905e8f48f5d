//! In-memory store implementation.
//!
//! Keeps customers and invoices in plain vectors behind a lock and reproduces the behaviour of
//! the PostgreSQL queries: generated ids, the inner join, date-descending order, and a foreign
//! key check on insert. It can also be switched into an "unavailable" mode where every call
//! fails the way an unreachable database would. Suitable for tests only; data is lost on drop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::db::{
    errors::{DbError, Result},
    models::{
        customers::CustomerDBResponse,
        invoices::{InvoiceCreateDBRequest, InvoiceDBResponse, InvoiceWithCustomerDBResponse},
    },
    store::Store,
};

#[derive(Default)]
struct Tables {
    customers: Vec<CustomerDBResponse>,
    invoices: Vec<InvoiceDBResponse>,
}

/// In-memory implementation of the [`Store`] trait.
///
/// # Example
/// ```ignore
/// let store = InMemoryStore::new();
/// store.insert_customer("cust-1", "Delba de Oliveira", "delba@oliveira.com");
/// let state = AppState::builder().store(Arc::new(store.clone())).config(config).build();
/// ```
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    next_id: Arc<AtomicU64>,
    unavailable: Arc<AtomicBool>,
    enforce_foreign_keys: Arc<AtomicBool>,
}

impl InMemoryStore {
    /// Create an empty store. Foreign keys are not enforced, matching a store whose schema
    /// leaves `invoices.customer_id` unconstrained.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject invoices whose customer does not exist, like the `invoices_customer_id_fkey` constraint
    pub fn with_foreign_keys(self) -> Self {
        self.enforce_foreign_keys.store(true, Ordering::SeqCst);
        self
    }

    /// Make every subsequent call fail as if the database were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn insert_customer(&self, id: &str, name: &str, email: &str) -> CustomerDBResponse {
        let customer = CustomerDBResponse {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            image_url: None,
        };
        self.tables.write().customers.push(customer.clone());
        customer
    }

    /// Put an invoice row straight into the table, bypassing the foreign key check
    pub fn insert_invoice(&self, invoice: InvoiceDBResponse) {
        self.tables.write().invoices.push(invoice);
    }

    /// Snapshot of every stored invoice, in insertion order
    pub fn invoices(&self) -> Vec<InvoiceDBResponse> {
        self.tables.read().invoices.clone()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DbError::Other(anyhow::anyhow!("connection refused: in-memory store is unavailable")));
        }
        Ok(())
    }

    fn generate_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        format!("00000000-0000-4000-8000-{n:012x}")
    }
}

#[async_trait::async_trait]
impl Store for InMemoryStore {
    async fn create_invoice(&self, request: &InvoiceCreateDBRequest) -> Result<InvoiceDBResponse> {
        self.check_available()?;

        let mut tables = self.tables.write();
        if self.enforce_foreign_keys.load(Ordering::SeqCst) && !tables.customers.iter().any(|c| c.id == request.customer_id) {
            return Err(DbError::ForeignKeyViolation {
                constraint: Some("invoices_customer_id_fkey".to_string()),
                table: Some("invoices".to_string()),
                message: format!("Key (customer_id)=({}) is not present in table \"customers\".", request.customer_id),
            });
        }

        let invoice = InvoiceDBResponse {
            id: self.generate_id(),
            customer_id: request.customer_id.clone(),
            amount: request.amount,
            status: request.status,
            date: request.date,
        };
        tables.invoices.push(invoice.clone());
        Ok(invoice)
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceWithCustomerDBResponse>> {
        self.check_available()?;

        let tables = self.tables.read();
        let mut rows: Vec<InvoiceWithCustomerDBResponse> = tables
            .invoices
            .iter()
            .filter_map(|invoice| {
                let customer = tables.customers.iter().find(|c| c.id == invoice.customer_id)?;
                Some(InvoiceWithCustomerDBResponse {
                    invoice: invoice.clone(),
                    name: customer.name.clone(),
                    email: customer.email.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| b.invoice.date.cmp(&a.invoice.date));
        Ok(rows)
    }

    async fn fetch_customers(&self) -> Result<Vec<CustomerDBResponse>> {
        self.check_available()?;

        let mut customers = self.tables.read().customers.clone();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }
}
