use crate::{
    db::{
        errors::{DbError, Result},
        models::invoices::{InvoiceCreateDBRequest, InvoiceDBResponse, InvoiceWithCustomerDBResponse},
    },
    types::{Cents, InvoiceStatus},
};
use chrono::NaiveDate;
use sqlx::{FromRow, PgConnection};

// Database entity model for an invoice row
#[derive(Debug, Clone, FromRow)]
struct Invoice {
    pub id: String,
    pub customer_id: String,
    pub amount: Cents,
    pub status: String,
    pub date: NaiveDate,
}

impl TryFrom<Invoice> for InvoiceDBResponse {
    type Error = DbError;

    fn try_from(row: Invoice) -> Result<Self> {
        let status = row
            .status
            .parse::<InvoiceStatus>()
            .map_err(|e| DbError::Other(anyhow::anyhow!("invoice {}: {}", row.id, e)))?;

        Ok(Self {
            id: row.id,
            customer_id: row.customer_id,
            amount: row.amount,
            status,
            date: row.date,
        })
    }
}

// Invoice row joined with its customer's identity fields
#[derive(Debug, Clone, FromRow)]
struct InvoiceWithCustomer {
    #[sqlx(flatten)]
    pub invoice: Invoice,
    pub name: String,
    pub email: String,
}

impl TryFrom<InvoiceWithCustomer> for InvoiceWithCustomerDBResponse {
    type Error = DbError;

    fn try_from(row: InvoiceWithCustomer) -> Result<Self> {
        Ok(Self {
            invoice: InvoiceDBResponse::try_from(row.invoice)?,
            name: row.name,
            email: row.email,
        })
    }
}

pub struct Invoices<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Invoices<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Insert a single invoice and return the stored row
    pub async fn create(&mut self, request: &InvoiceCreateDBRequest) -> Result<InvoiceDBResponse> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (customer_id, amount, status, date)
            VALUES ($1::text::uuid, $2, $3, $4)
            RETURNING id::text AS id, customer_id::text AS customer_id, amount, status::text AS status, date
            "#,
        )
        .bind(&request.customer_id)
        .bind(request.amount)
        .bind(request.status.as_str())
        .bind(request.date)
        .fetch_one(&mut *self.db)
        .await?;

        InvoiceDBResponse::try_from(invoice)
    }

    /// List every invoice that has a matching customer, newest first.
    ///
    /// This is an inner join: invoices whose customer row is missing are not returned.
    pub async fn list_with_customers(&mut self) -> Result<Vec<InvoiceWithCustomerDBResponse>> {
        let rows = sqlx::query_as::<_, InvoiceWithCustomer>(
            r#"
            SELECT
                invoices.id::text AS id,
                invoices.customer_id::text AS customer_id,
                invoices.amount,
                invoices.status::text AS status,
                invoices.date,
                customers.name,
                customers.email
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            ORDER BY invoices.date DESC
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        rows.into_iter().map(InvoiceWithCustomerDBResponse::try_from).collect()
    }
}
