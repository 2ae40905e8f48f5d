//! API request and response data models.
//!
//! These define the public wire contract and are kept apart from [`crate::db::models`]:
//! amounts here are decimal dollars, in the database they are integer cents.
//!
//! - [`invoices`]: invoice creation input, invoice responses and their envelopes
//! - [`customers`]: customer records
//!
//! Error envelopes are produced by [`crate::errors::Error`].

pub mod customers;
pub mod invoices;
