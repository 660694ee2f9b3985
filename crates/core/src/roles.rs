//! Well-known role name constants.
//!
//! A user with no row in the `roles` table is treated as [`ROLE_USER`].

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
