//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx/PostgreSQL persistence
//! - `http` - axum REST API

pub mod http;
pub mod postgres;
