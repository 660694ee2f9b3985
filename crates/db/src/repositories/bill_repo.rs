//! Repository for the `bills` table.

use sqlx::PgPool;
use voltbill_core::bill_patch::BillPatch;
use voltbill_core::types::DbId;

use crate::models::bill::{Bill, BillSummary, CreateBill};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, consumer_id, bill_amount, due_date, user_id, created_at, updated_at";

/// Provides CRUD operations for bills.
pub struct BillRepo;

impl BillRepo {
    /// Insert a new bill, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBill) -> Result<Bill, sqlx::Error> {
        let query = format!(
            "INSERT INTO bills (consumer_id, bill_amount, due_date, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bill>(&query)
            .bind(&input.consumer_id)
            .bind(input.bill_amount)
            .bind(input.due_date)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// List all bills ordered by due date ascending.
    pub async fn list_by_due_date(pool: &PgPool) -> Result<Vec<Bill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bills ORDER BY due_date ASC, id ASC");
        sqlx::query_as::<_, Bill>(&query).fetch_all(pool).await
    }

    /// Set a single column to a new value.
    ///
    /// The column is fixed by the [`BillPatch`] variant, so no caller-supplied
    /// identifier ever reaches the SQL text. Returns `false` if no row with
    /// the given `id` exists.
    pub async fn update_field(
        pool: &PgPool,
        id: DbId,
        patch: &BillPatch,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE bills SET {} = $2, updated_at = now() WHERE id = $1",
            patch.field_name()
        );
        let result = match patch {
            BillPatch::ConsumerId(v) => sqlx::query(&query).bind(id).bind(v).execute(pool).await?,
            BillPatch::BillAmount(v) => sqlx::query(&query).bind(id).bind(v).execute(pool).await?,
            BillPatch::DueDate(v) => sqlx::query(&query).bind(id).bind(v).execute(pool).await?,
            BillPatch::UserId(v) => sqlx::query(&query).bind(id).bind(v).execute(pool).await?,
        };
        Ok(result.rows_affected() > 0)
    }

    /// Delete a bill by id. Deleting a nonexistent id is not an error.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM bills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Find the single bill for a consumer identifier.
    ///
    /// When `owner` is given, the match is additionally restricted to bills
    /// owned by that user (the non-admin visibility rule). Zero matches and
    /// more than one match both return `None`.
    pub async fn find_by_consumer(
        pool: &PgPool,
        consumer_id: &str,
        owner: Option<DbId>,
    ) -> Result<Option<BillSummary>, sqlx::Error> {
        let rows = match owner {
            Some(user_id) => {
                sqlx::query_as::<_, BillSummary>(
                    "SELECT consumer_id, bill_amount, due_date FROM bills
                     WHERE consumer_id = $1 AND user_id = $2",
                )
                .bind(consumer_id)
                .bind(user_id)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, BillSummary>(
                    "SELECT consumer_id, bill_amount, due_date FROM bills
                     WHERE consumer_id = $1",
                )
                .bind(consumer_id)
                .fetch_all(pool)
                .await?
            }
        };

        if rows.len() != 1 {
            if rows.len() > 1 {
                tracing::warn!(consumer_id, matches = rows.len(), "Duplicate consumer_id rows");
            }
            return Ok(None);
        }
        Ok(rows.into_iter().next())
    }
}
