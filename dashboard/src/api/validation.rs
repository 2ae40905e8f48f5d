//! Request body validation.
//!
//! Bodies are validated from a raw [`serde_json::Value`] rather than through a derived
//! `Deserialize`, because every field has to be checked (and reported) independently and the
//! amount is coerced from several JSON types. The outcome is either a typed, validated value or
//! a [`FieldErrors`] map listing every message for every failing field.

use crate::api::models::invoices::InvoiceCreate;
use crate::types::{Cents, InvoiceStatus};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::num::IntErrorKind;
use std::str::FromStr;
use utoipa::ToSchema;

pub const CUSTOMER_ID_REQUIRED: &str = "Customer ID is required";
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than 0";
pub const AMOUNT_NOT_A_NUMBER: &str = "Expected number, received nan";
pub const AMOUNT_TOO_LARGE: &str = "Amount is too large";
pub const STATUS_INVALID: &str = "Status must be either 'pending' or 'paid'";

/// Field name to the list of human-readable problems with that field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Result of coercing a JSON value to a number the way JavaScript's `Number()` does
#[derive(Debug, Clone, Copy, PartialEq)]
enum Coerced {
    NaN,
    Finite(Decimal),
    /// Finite or infinite, but too large in magnitude to represent as a [`Decimal`]
    OutOfRange { negative: bool },
}

/// JSON type name as reported in "Expected string, received ..." messages
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)).ok()
}

fn coerce_text(text: &str) -> Coerced {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Coerced::Finite(Decimal::ZERO);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Coerced::OutOfRange { negative: false },
        "-Infinity" => return Coerced::OutOfRange { negative: true },
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        // Number() rejects a sign after the prefix
        if !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Coerced::NaN;
        }
        return match i64::from_str_radix(digits, radix) {
            Ok(n) => Coerced::Finite(Decimal::from(n)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Coerced::OutOfRange { negative: false },
            Err(_) => Coerced::NaN,
        };
    }

    // Rust accepts spellings like "inf" and "NaN" that Number() rejects
    if !trimmed.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) {
        return Coerced::NaN;
    }

    if let Some(d) = parse_decimal(trimmed) {
        return Coerced::Finite(d);
    }

    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.abs() < 1.0 => Coerced::Finite(Decimal::ZERO),
        Ok(f) if !f.is_nan() => Coerced::OutOfRange { negative: f < 0.0 },
        _ => Coerced::NaN,
    }
}

fn coerce_number(value: Option<&Value>) -> Coerced {
    match value {
        None => Coerced::NaN,
        Some(Value::Null) => Coerced::Finite(Decimal::ZERO),
        Some(Value::Bool(b)) => Coerced::Finite(if *b { Decimal::ONE } else { Decimal::ZERO }),
        // The shortest round-tripping text of the number, parsed exactly
        Some(Value::Number(n)) => coerce_text(&n.to_string()),
        Some(Value::String(s)) => coerce_text(s),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Coerced::NaN,
    }
}

fn validate_customer_id(value: Option<&Value>, errors: &mut FieldErrors) -> Option<String> {
    match value {
        None => {
            errors.add("customerId", "Required");
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.add("customerId", CUSTOMER_ID_REQUIRED);
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.add("customerId", format!("Expected string, received {}", type_name(other)));
            None
        }
    }
}

fn validate_amount(value: Option<&Value>, errors: &mut FieldErrors) -> Option<Cents> {
    match coerce_number(value) {
        Coerced::NaN => {
            errors.add("amount", AMOUNT_NOT_A_NUMBER);
            None
        }
        Coerced::OutOfRange { negative: true } => {
            errors.add("amount", AMOUNT_NOT_POSITIVE);
            None
        }
        Coerced::OutOfRange { negative: false } => {
            errors.add("amount", AMOUNT_TOO_LARGE);
            None
        }
        Coerced::Finite(dollars) if dollars <= Decimal::ZERO => {
            errors.add("amount", AMOUNT_NOT_POSITIVE);
            None
        }
        Coerced::Finite(dollars) => match Cents::from_dollars(dollars) {
            // Positive, but less than half a cent
            Some(cents) if cents.get() <= 0 => {
                errors.add("amount", AMOUNT_NOT_POSITIVE);
                None
            }
            Some(cents) => Some(cents),
            None => {
                errors.add("amount", AMOUNT_TOO_LARGE);
                None
            }
        },
    }
}

fn validate_status(value: Option<&Value>, errors: &mut FieldErrors) -> Option<InvoiceStatus> {
    match value.and_then(Value::as_str).map(InvoiceStatus::from_str) {
        Some(Ok(status)) => Some(status),
        _ => {
            errors.add("status", STATUS_INVALID);
            None
        }
    }
}

/// Validate an invoice creation body.
///
/// All three fields are checked; the error map contains an entry for every field that failed.
/// A body that is not a JSON object fails with an empty error map.
pub fn validate_invoice_create(body: &Value) -> Result<InvoiceCreate, FieldErrors> {
    let mut errors = FieldErrors::new();

    let Some(fields) = body.as_object() else {
        return Err(errors);
    };

    let customer_id = validate_customer_id(fields.get("customerId"), &mut errors);
    let amount = validate_amount(fields.get("amount"), &mut errors);
    let status = validate_status(fields.get("status"), &mut errors);

    match (customer_id, amount, status) {
        (Some(customer_id), Some(amount), Some(status)) => Ok(InvoiceCreate {
            customer_id,
            amount,
            status,
        }),
        _ => Err(errors),
    }
}
