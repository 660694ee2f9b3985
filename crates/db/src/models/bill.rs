//! Bill entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voltbill_core::types::{DbId, Timestamp};

/// Full bill row from the `bills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bill {
    pub id: DbId,
    /// End-user-facing billing account code, distinct from `user_id`.
    pub consumer_id: String,
    pub bill_amount: f64,
    pub due_date: NaiveDate,
    /// Owning user; controls non-admin visibility.
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new bill.
#[derive(Debug, Deserialize)]
pub struct CreateBill {
    pub consumer_id: String,
    pub bill_amount: f64,
    pub due_date: NaiveDate,
    pub user_id: DbId,
}

/// Consumer-facing bill projection returned by the lookup endpoint.
///
/// Deliberately excludes the internal row id and owning user id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BillSummary {
    pub consumer_id: String,
    pub bill_amount: f64,
    pub due_date: NaiveDate,
}
