//! API request/response models for invoices.

use crate::{
    db::models::invoices::{InvoiceDBResponse, InvoiceWithCustomerDBResponse},
    types::{Cents, InvoiceStatus, serialize_dollars},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/invoice`.
///
/// Documents the wire format only: bodies are checked field by field by
/// [`crate::api::validation::validate_invoice_create`], which produces an [`InvoiceCreate`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreateRequest {
    /// Customer the invoice is billed to (must be non-empty)
    pub customer_id: String,
    /// Amount in dollars; must be greater than zero. Numeric strings are accepted.
    #[schema(value_type = f64, example = 45.0)]
    pub amount: serde_json::Value,
    pub status: InvoiceStatus,
}

/// A validated invoice creation request
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceCreate {
    pub customer_id: String,
    pub amount: Cents,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvoiceResponse {
    pub id: String,
    pub customer_id: String,
    /// Amount in dollars
    #[serde(serialize_with = "serialize_dollars")]
    #[schema(value_type = f64)]
    pub amount: Decimal,
    pub status: InvoiceStatus,
    /// Creation date, `YYYY-MM-DD`
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
}

/// An invoice as listed, with its customer's name and email
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvoiceWithCustomerResponse {
    pub id: String,
    pub customer_id: String,
    /// Amount in dollars
    #[serde(serialize_with = "serialize_dollars")]
    #[schema(value_type = f64)]
    pub amount: Decimal,
    pub status: InvoiceStatus,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub name: String,
    pub email: String,
}

impl From<InvoiceDBResponse> for InvoiceResponse {
    fn from(db: InvoiceDBResponse) -> Self {
        Self {
            id: db.id,
            customer_id: db.customer_id,
            amount: db.amount.to_dollars(),
            status: db.status,
            date: db.date,
        }
    }
}

impl From<InvoiceWithCustomerDBResponse> for InvoiceWithCustomerResponse {
    fn from(db: InvoiceWithCustomerDBResponse) -> Self {
        Self {
            id: db.invoice.id,
            customer_id: db.invoice.customer_id,
            amount: db.invoice.amount.to_dollars(),
            status: db.invoice.status,
            date: db.invoice.date,
            name: db.name,
            email: db.email,
        }
    }
}

/// 201 body of `POST /api/invoice`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvoiceCreatedEnvelope {
    pub success: bool,
    pub message: String,
    pub data: InvoiceResponse,
}

/// 200 body of `GET /api/invoice`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvoiceListEnvelope {
    pub success: bool,
    pub data: Vec<InvoiceWithCustomerResponse>,
}
