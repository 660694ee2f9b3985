//! Handlers for the `/admin/bills` resource (bill management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use voltbill_core::bill_patch::BillPatch;
use voltbill_core::error::CoreError;
use voltbill_core::types::DbId;
use voltbill_db::models::bill::{Bill, CreateBill};
use voltbill_db::repositories::BillRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/bills`.
///
/// `total_amount` is the wire name for the `bill_amount` column.
#[derive(Debug, Deserialize)]
pub struct CreateBillRequest {
    pub consumer_id: String,
    pub total_amount: f64,
    pub due_date: NaiveDate,
    pub user_id: DbId,
}

/// Request body for `PUT /admin/bills`.
#[derive(Debug, Deserialize)]
pub struct UpdateBillRequest {
    pub id: DbId,
    pub field: String,
    pub value: serde_json::Value,
}

/// Query parameters for `DELETE /admin/bills`.
#[derive(Debug, Deserialize)]
pub struct DeleteBillParams {
    pub id: Option<DbId>,
}

/// Response body for `GET /admin/bills`.
#[derive(Debug, Serialize)]
pub struct BillListResponse {
    pub bills: Vec<Bill>,
}

/// Response body for `POST /admin/bills`.
///
/// The inserted row is wrapped in a one-element array.
#[derive(Debug, Serialize)]
pub struct BillCreatedResponse {
    pub bill: Vec<Bill>,
}

/// Response body for update and delete.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/bills
///
/// List all bills ordered by due date ascending. No pagination.
pub async fn list_bills(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<BillListResponse>> {
    let bills = BillRepo::list_by_due_date(&state.pool).await?;
    Ok(Json(BillListResponse { bills }))
}

/// POST /api/v1/admin/bills
///
/// Insert one bill and return the inserted row.
pub async fn create_bill(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateBillRequest>,
) -> AppResult<Json<BillCreatedResponse>> {
    let create_dto = CreateBill {
        consumer_id: input.consumer_id,
        bill_amount: input.total_amount,
        due_date: input.due_date,
        user_id: input.user_id,
    };

    let bill = BillRepo::create(&state.pool, &create_dto).await?;
    tracing::info!(admin_id = admin.user_id, bill_id = bill.id, "Bill created");

    Ok(Json(BillCreatedResponse { bill: vec![bill] }))
}

/// PUT /api/v1/admin/bills
///
/// Set a single whitelisted field to a new value. Unknown field names and
/// untypeable values are rejected with 400; an unknown bill id is a 404.
pub async fn update_bill(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<UpdateBillRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let patch = BillPatch::from_parts(&input.field, &input.value).map_err(AppError::Core)?;

    let updated = BillRepo::update_field(&state.pool, input.id, &patch).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Bill",
            key: input.id.to_string(),
        }));
    }

    tracing::info!(
        admin_id = admin.user_id,
        bill_id = input.id,
        field = patch.field_name(),
        "Bill updated"
    );
    Ok(Json(SuccessResponse { success: true }))
}

/// DELETE /api/v1/admin/bills?id={id}
///
/// Delete a bill by id. Idempotent: deleting a nonexistent id succeeds.
pub async fn delete_bill(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(params): Query<DeleteBillParams>,
) -> AppResult<Json<SuccessResponse>> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Missing id query parameter".into()))?;

    BillRepo::delete(&state.pool, id).await?;

    tracing::info!(admin_id = admin.user_id, bill_id = id, "Bill deleted");
    Ok(Json(SuccessResponse { success: true }))
}
