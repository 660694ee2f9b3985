//! Role-based access control extractors.
//!
//! Roles are not embedded in the access token; they are resolved from the
//! `roles` table on every request, so revoking or granting `admin` takes
//! effect immediately. A user with no role row is a regular user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use voltbill_core::error::CoreError;
use voltbill_core::roles::{ROLE_ADMIN, ROLE_USER};
use voltbill_core::types::DbId;

use super::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Resolve a user's role from the `roles` table.
///
/// Returns [`ROLE_USER`] when no role row exists.
pub async fn resolve_role(pool: &voltbill_db::DbPool, user_id: DbId) -> AppResult<String> {
    let role = voltbill_db::repositories::RoleRepo::find_for_user(pool, user_id).await?;
    Ok(role.unwrap_or_else(|| ROLE_USER.to_string()))
}

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        let role = resolve_role(&state.pool, user.user_id).await?;
        if role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
