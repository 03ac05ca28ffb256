//! HTTP adapter for membership endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::MembershipAppState;
pub use routes::{member_routes, membership_router, transaction_routes};
