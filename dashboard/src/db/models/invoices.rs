//! Database models for invoices.

use crate::types::{Cents, InvoiceStatus};
use chrono::NaiveDate;

/// Database request for inserting a new invoice
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceCreateDBRequest {
    pub customer_id: String,
    pub amount: Cents,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Database response for an invoice row
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDBResponse {
    pub id: String,
    pub customer_id: String,
    pub amount: Cents,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// An invoice joined with the identity fields of its customer
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceWithCustomerDBResponse {
    pub invoice: InvoiceDBResponse,
    pub name: String,
    pub email: String,
}
