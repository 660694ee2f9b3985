pub mod admin_bills;
pub mod auth;
pub mod bills;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login             login (public)
///
/// /admin/bills            list (GET), add (POST), update (PUT),
///                         delete (DELETE ?id=) -- admin only
///
/// /bills                  single-bill lookup (GET ?consumer_id=) --
///                         any authenticated user
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(admin_bills::router())
        .merge(bills::router())
}
