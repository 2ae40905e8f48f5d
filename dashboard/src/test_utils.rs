//! Test utilities for integration testing (available with `test-utils` feature).

use crate::{
    Application,
    config::{Config, DatabaseConfig, PoolSettings},
    db::in_memory::InMemoryStore,
};
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;

/// Schema the service expects to find, with the foreign key named the way PostgreSQL names it
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id UUID DEFAULT gen_random_uuid() PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    image_url VARCHAR(255)
);

CREATE TABLE IF NOT EXISTS invoices (
    id UUID DEFAULT gen_random_uuid() PRIMARY KEY,
    customer_id UUID NOT NULL REFERENCES customers (id),
    amount INT NOT NULL,
    status VARCHAR(255) NOT NULL,
    date DATE NOT NULL
);
"#;

/// Configuration for tests. The database URL is never connected to by the in-memory app.
pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig {
            url: Some("postgres://localhost/dashboard_test".to_string()),
            require_tls: false,
            pool: PoolSettings {
                max_connections: 1,
                min_connections: 0,
                ..Default::default()
            },
        },
        ..Default::default()
    }
}

/// The full router over an in-memory store, wrapped in a test server
pub fn create_test_app(store: InMemoryStore) -> TestServer {
    Application::with_store(create_test_config(), Arc::new(store))
        .expect("Failed to create application")
        .into_test_server()
}

/// Create the `customers` and `invoices` tables in a scratch database
pub async fn create_schema(pool: &PgPool) {
    sqlx::raw_sql(SCHEMA).execute(pool).await.expect("Failed to create schema");
}

/// Insert a customer and return its generated id
pub async fn insert_customer(pool: &PgPool, name: &str, email: &str) -> String {
    sqlx::query_scalar::<_, String>("INSERT INTO customers (name, email) VALUES ($1, $2) RETURNING id::text")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("Failed to insert customer")
}

/// Insert an invoice row directly, with an explicit date
pub async fn insert_invoice_row(pool: &PgPool, customer_id: &str, cents: i32, status: &str, date: &str) -> String {
    sqlx::query_scalar::<_, String>(
        "INSERT INTO invoices (customer_id, amount, status, date) VALUES ($1::text::uuid, $2, $3, $4::text::date) RETURNING id::text",
    )
    .bind(customer_id)
    .bind(cents)
    .bind(status)
    .bind(date)
    .fetch_one(pool)
    .await
    .expect("Failed to insert invoice")
}
