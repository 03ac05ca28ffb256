//! Request principal extraction.
//!
//! Handlers never read ambient session state; the acting user and role
//! arrive explicitly on every request and are extracted here. In
//! production the headers are set by the session-terminating proxy after
//! it validates the session; for development they can be set by hand.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::foundation::UserId;
use crate::domain::user::Role;

use super::error::ErrorResponse;

/// Authenticated principal extracted from request headers.
///
/// `X-User-Id` is required; `X-User-Role` defaults to the regular user
/// role when absent so a missing header can never grant admin access.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Whether this principal may manage members.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Rejection type for AuthenticatedUser extraction.
#[derive(Debug)]
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new("AUTHENTICATION_REQUIRED", "Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<UserId>().ok())
                .ok_or(AuthenticationRequired)?;

            let role = parts
                .headers
                .get("X-User-Role")
                .and_then(|v| v.to_str().ok())
                .and_then(Role::parse)
                .unwrap_or(Role::User);

            Ok(AuthenticatedUser { user_id, role })
        })
    }
}
