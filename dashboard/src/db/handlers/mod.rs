//! Repository implementations for database access.
//!
//! Each repository wraps a borrowed `PgConnection`, issues its statements through it, and
//! returns models from [`crate::db::models`]. Statements are single autocommit statements, so a
//! pool connection is enough; no transaction is opened.
//!
//! ```ignore
//! use dashboard::db::handlers::Invoices;
//!
//! let mut conn = pool.acquire().await?;
//! let invoices = Invoices::new(&mut conn).list_with_customers().await?;
//! ```
//!
//! - [`Invoices`]: invoice insert and the invoice/customer listing
//! - [`Customers`]: the customer listing used by the customer lookup endpoint

pub mod customers;
pub mod invoices;

pub use customers::Customers;
pub use invoices::Invoices;
