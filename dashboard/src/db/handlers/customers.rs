use crate::db::{errors::Result, models::customers::CustomerDBResponse};
use sqlx::{FromRow, PgConnection};

// Database entity model for a customer row
#[derive(Debug, Clone, FromRow)]
struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

impl From<Customer> for CustomerDBResponse {
    fn from(row: Customer) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
        }
    }
}

pub struct Customers<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Customers<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Fetch every customer, alphabetically by name
    pub async fn fetch_customers(&mut self) -> Result<Vec<CustomerDBResponse>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id::text AS id, name, email, image_url
            FROM customers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(customers.into_iter().map(CustomerDBResponse::from).collect())
    }
}
