//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for the invoice and customer endpoints
//! - **[`models`]**: Request/response data structures for API communication
//! - **[`validation`]**: Field-by-field checking of invoice creation bodies
//!
//! # API Structure
//!
//! - **Invoices** (`/api/invoice`): create an invoice, list invoices with their customer
//! - **Customers** (`/api/test`): list every customer record as stored
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`. The document is served
//! at `/api-docs/openapi.json` and rendered at `/docs`.

pub mod handlers;
pub mod models;
pub mod validation;
