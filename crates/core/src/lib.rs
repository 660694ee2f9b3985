//! Domain types shared across the billing service.

pub mod bill_patch;
pub mod error;
pub mod roles;
pub mod types;
