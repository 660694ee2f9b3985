//! Handler for the consumer-facing single-bill lookup.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use voltbill_core::error::CoreError;
use voltbill_core::roles::ROLE_ADMIN;
use voltbill_db::models::bill::BillSummary;
use voltbill_db::repositories::BillRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::resolve_role;
use crate::state::AppState;

/// Query parameters for `GET /bills`.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub consumer_id: Option<String>,
}

/// Response body for `GET /bills`.
#[derive(Debug, Serialize)]
pub struct BillLookupResponse {
    pub bill: BillSummary,
}

/// GET /api/v1/bills?consumer_id={consumer_id}
///
/// Look up the single bill for a consumer identifier. Admins see any bill;
/// other users only see bills they own, so a bill owned by someone else is
/// indistinguishable from a missing one. Zero matches and more than one
/// match both surface as 404.
pub async fn lookup_bill(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<LookupParams>,
) -> AppResult<Json<BillLookupResponse>> {
    let consumer_id = params
        .consumer_id
        .ok_or_else(|| AppError::BadRequest("Missing consumer_id query parameter".into()))?;

    let role = resolve_role(&state.pool, user.user_id).await?;
    let owner = if role == ROLE_ADMIN {
        None
    } else {
        Some(user.user_id)
    };

    let bill = BillRepo::find_by_consumer(&state.pool, &consumer_id, owner)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Bill",
                key: consumer_id.clone(),
            })
        })?;

    Ok(Json(BillLookupResponse { bill }))
}
