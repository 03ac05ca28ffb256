//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! The `principal` module holds the explicit request principal extractor
//! used by all of them.

pub mod auth;
pub mod error;
pub mod membership;
pub mod principal;
pub mod reports;

pub use auth::{auth_router, AuthAppState};
pub use error::ErrorResponse;
pub use membership::{membership_router, MembershipAppState};
pub use principal::AuthenticatedUser;
pub use reports::{reports_router, ReportsAppState};
