//! Repository for the `roles` table.

use sqlx::PgPool;
use voltbill_core::types::DbId;

/// Provides role assignment lookups.
pub struct RoleRepo;

impl RoleRepo {
    /// Find the role assigned to a user.
    ///
    /// When multiple rows exist, the earliest assignment wins. `None` means
    /// the user has no role row and is treated as a regular user.
    pub async fn find_for_user(pool: &PgPool, user_id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT role FROM roles WHERE user_id = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Assign a role to a user.
    pub async fn assign(pool: &PgPool, user_id: DbId, role: &str) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO roles (user_id, role) VALUES ($1, $2)")
            .bind(user_id)
            .bind(role)
            .execute(pool)
            .await?;
        Ok(())
    }
}
