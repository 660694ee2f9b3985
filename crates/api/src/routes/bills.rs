//! Route definition for the consumer-facing bill lookup.

use axum::routing::get;
use axum::Router;

use crate::handlers::bills;
use crate::state::AppState;

/// Routes for `/bills`, merged into the `/api/v1` tree.
///
/// ```text
/// GET /bills?consumer_id=   -> lookup_bill (any authenticated user)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/bills", get(bills::lookup_bill))
}
