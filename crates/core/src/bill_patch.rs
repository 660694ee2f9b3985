//! Typed single-field bill updates.
//!
//! The admin update endpoint takes a `{id, field, value}` body. Rather than
//! passing the field name through to the database verbatim, the name is
//! checked against an explicit whitelist and the value is parsed into the
//! column's native type. Anything else is a validation error.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

/// Field names the update endpoint accepts.
pub const UPDATABLE_FIELDS: [&str; 4] = ["consumer_id", "bill_amount", "due_date", "user_id"];

/// A validated, typed update to a single bill column.
#[derive(Debug, Clone, PartialEq)]
pub enum BillPatch {
    ConsumerId(String),
    BillAmount(f64),
    DueDate(NaiveDate),
    UserId(DbId),
}

impl BillPatch {
    /// Parse a field name and raw JSON value into a typed patch.
    ///
    /// Accepts JSON numbers for numeric columns, and strings everywhere
    /// (numeric and date strings are parsed). Unknown field names and
    /// untypeable values are rejected with [`CoreError::Validation`].
    pub fn from_parts(field: &str, value: &Value) -> Result<Self, CoreError> {
        match field {
            "consumer_id" => {
                let s = value.as_str().ok_or_else(|| {
                    CoreError::Validation("consumer_id must be a string".into())
                })?;
                Ok(BillPatch::ConsumerId(s.to_string()))
            }
            "bill_amount" => {
                let amount = parse_f64(value).ok_or_else(|| {
                    CoreError::Validation("bill_amount must be a number".into())
                })?;
                Ok(BillPatch::BillAmount(amount))
            }
            "due_date" => {
                let s = value.as_str().ok_or_else(|| {
                    CoreError::Validation("due_date must be a YYYY-MM-DD string".into())
                })?;
                let date = s.parse::<NaiveDate>().map_err(|_| {
                    CoreError::Validation(format!("due_date '{s}' is not a valid date"))
                })?;
                Ok(BillPatch::DueDate(date))
            }
            "user_id" => {
                let id = parse_i64(value).ok_or_else(|| {
                    CoreError::Validation("user_id must be an integer".into())
                })?;
                Ok(BillPatch::UserId(id))
            }
            other => Err(CoreError::Validation(format!(
                "Field '{other}' is not updatable. Allowed fields: {}",
                UPDATABLE_FIELDS.join(", ")
            ))),
        }
    }

    /// The column name this patch targets.
    pub fn field_name(&self) -> &'static str {
        match self {
            BillPatch::ConsumerId(_) => "consumer_id",
            BillPatch::BillAmount(_) => "bill_amount",
            BillPatch::DueDate(_) => "due_date",
            BillPatch::UserId(_) => "user_id",
        }
    }
}

fn parse_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
