//! Database record models matching table schemas.
//!
//! These are the shapes repositories accept and return. They are distinct from the API models
//! in [`crate::api::models`] so storage (integer cents, text ids) and the wire format (decimal
//! dollars, camelCase input) can evolve independently.
//!
//! - [`invoices`]: invoice rows and the invoice/customer join
//! - [`customers`]: customer rows

pub mod customers;
pub mod invoices;
