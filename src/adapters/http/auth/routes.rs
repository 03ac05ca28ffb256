//! Axum router configuration for authentication endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, AuthAppState};

/// Create the authentication router.
///
/// # Routes
///
/// - `POST /login` - Verify credentials, return the principal
pub fn auth_router() -> Router<AuthAppState> {
    Router::new().route("/login", post(login))
}
