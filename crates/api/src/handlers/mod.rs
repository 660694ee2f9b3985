//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `voltbill_db` and
//! map errors via [`crate::error::AppError`].

pub mod admin_bills;
pub mod auth;
pub mod bills;
