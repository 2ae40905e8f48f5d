//! Domain value types shared between the API and database layers.
//!
//! - [`InvoiceStatus`]: the two states an invoice can be in
//! - [`Cents`]: money as stored (integer cents), with exact conversions to and from dollars
//!
//! Amounts cross the API boundary as decimal dollars and are stored as integer cents. The
//! conversion never goes through binary floating point: dollars are held as [`Decimal`] and
//! rounded half away from zero to the nearest cent.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Invoice payment status, stored as lowercase text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    /// Exact match only: "Pending" or " paid" are not statuses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(format!("unknown invoice status '{other}'")),
        }
    }
}

/// An amount of money in integer cents, as held in the `invoices.amount` INT column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct Cents(i32);

impl Cents {
    pub const fn new(cents: i32) -> Self {
        Self(cents)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    /// Convert decimal dollars to cents, rounding half away from zero.
    ///
    /// Returns `None` when the result does not fit the storage column.
    pub fn from_dollars(dollars: Decimal) -> Option<Self> {
        dollars
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i32()
            .map(Self)
    }

    /// Exact dollar value (`cents / 100`)
    pub fn to_dollars(self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }
}

/// Serialize a dollar amount as a plain JSON number: `45` rather than `"45.00"` or `45.0`.
pub fn serialize_dollars<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let normalized = value.normalize();
    if normalized.scale() == 0
        && let Some(whole) = normalized.to_i64()
    {
        return serializer.serialize_i64(whole);
    }
    // Parsing the decimal text gives the nearest f64, which `to_f64` does not guarantee
    match normalized.to_string().parse::<f64>() {
        Ok(float) if float.is_finite() => serializer.serialize_f64(float),
        _ => Err(serde::ser::Error::custom(format!("amount {value} is not representable as a number"))),
    }
}
