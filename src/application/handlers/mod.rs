//! Command and query handlers, one module per domain area.

pub mod auth;
pub mod membership;
pub mod reports;
