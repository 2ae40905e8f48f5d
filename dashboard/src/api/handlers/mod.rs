//! HTTP request handlers for all API endpoints.
//!
//! Handlers receive the shared [`crate::AppState`] and talk to persistence only through its
//! [`crate::db::Store`]. Failures are returned as [`crate::errors::Error`], which renders the
//! JSON error body expected by each endpoint.
//!
//! - [`invoices`]: invoice creation and listing
//! - [`customers`]: customer lookup

pub mod customers;
pub mod invoices;
