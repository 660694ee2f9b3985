//! Route definitions for the `/admin/bills` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin_bills;
use crate::state::AppState;

/// Routes for `/admin/bills`, merged into the `/api/v1` tree.
///
/// All routes require the `admin` role (enforced by handler extractors).
/// Update and delete address the row via the request body and the `id`
/// query parameter respectively, not a path segment.
///
/// ```text
/// GET    /admin/bills        -> list_bills
/// POST   /admin/bills        -> create_bill
/// PUT    /admin/bills        -> update_bill
/// DELETE /admin/bills?id=    -> delete_bill
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/admin/bills",
        get(admin_bills::list_bills)
            .post(admin_bills::create_bill)
            .put(admin_bills::update_bill)
            .delete(admin_bills::delete_bill),
    )
}
