//! HTTP DTOs for authentication endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::auth::AuthenticatedPrincipal;
use crate::domain::user::Role;

/// Login request carrying credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Verified principal returned on successful login.
///
/// Session issuance is the caller's concern; this is the material it
/// needs to build one.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

impl From<AuthenticatedPrincipal> for LoginResponse {
    fn from(principal: AuthenticatedPrincipal) -> Self {
        Self {
            user_id: principal.user_id.to_string(),
            username: principal.username,
            role: principal.role,
        }
    }
}
