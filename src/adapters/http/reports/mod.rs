//! HTTP adapter for report endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ReportsAppState;
pub use routes::reports_router;
