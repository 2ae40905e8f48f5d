//! The store client handed to request handlers.
//!
//! [`Store`] is the single seam between the HTTP layer and persistence. The production
//! implementation, [`PostgresStore`], checks a connection out of the shared pool per call and
//! delegates to the repositories in [`crate::db::handlers`]. Tests substitute
//! [`crate::db::in_memory::InMemoryStore`].

use crate::db::{
    errors::{DbError, Result},
    handlers::{Customers, Invoices},
    models::{
        customers::CustomerDBResponse,
        invoices::{InvoiceCreateDBRequest, InvoiceDBResponse, InvoiceWithCustomerDBResponse},
    },
};
use sqlx::PgPool;

/// Data access used by the invoice and customer handlers.
///
/// Implementations must be safe to share across concurrently running requests.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Insert one invoice and return it as stored
    async fn create_invoice(&self, request: &InvoiceCreateDBRequest) -> Result<InvoiceDBResponse>;

    /// All invoices that have a customer, joined with the customer's name and email, by date descending
    async fn list_invoices(&self) -> Result<Vec<InvoiceWithCustomerDBResponse>>;

    /// All customers
    async fn fetch_customers(&self) -> Result<Vec<CustomerDBResponse>>;
}

/// [`Store`] backed by a PostgreSQL connection pool
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn acquire(&self) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>> {
        self.pool.acquire().await.map_err(DbError::from)
    }
}

#[async_trait::async_trait]
impl Store for PostgresStore {
    #[tracing::instrument(skip_all, fields(customer_id = %request.customer_id, amount = request.amount.get()))]
    async fn create_invoice(&self, request: &InvoiceCreateDBRequest) -> Result<InvoiceDBResponse> {
        let mut conn = self.acquire().await?;
        Invoices::new(&mut conn).create(request).await
    }

    #[tracing::instrument(skip_all)]
    async fn list_invoices(&self) -> Result<Vec<InvoiceWithCustomerDBResponse>> {
        let mut conn = self.acquire().await?;
        Invoices::new(&mut conn).list_with_customers().await
    }

    #[tracing::instrument(skip_all)]
    async fn fetch_customers(&self) -> Result<Vec<CustomerDBResponse>> {
        let mut conn = self.acquire().await?;
        Customers::new(&mut conn).fetch_customers().await
    }
}
