//! HTTP handlers for authentication endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::auth::{AuthenticateUserCommand, AuthenticateUserHandler};
use crate::domain::user::AuthError;
use crate::ports::UserDirectory;

use super::super::error::ErrorResponse;
use super::dto::{LoginRequest, LoginResponse};

/// Shared application state containing authentication dependencies.
#[derive(Clone)]
pub struct AuthAppState {
    pub user_directory: Arc<dyn UserDirectory>,
}

impl AuthAppState {
    pub fn authenticate_handler(&self) -> AuthenticateUserHandler {
        AuthenticateUserHandler::new(self.user_directory.clone())
    }
}

/// POST /api/auth/login - Verify credentials and return the principal
pub async fn login(
    State(state): State<AuthAppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
    let handler = state.authenticate_handler();
    let principal = handler
        .handle(AuthenticateUserCommand {
            username: request.username,
            password: request.password,
        })
        .await?;

    Ok(Json(LoginResponse::from(principal)))
}

/// API error type that converts auth errors to HTTP responses.
pub struct AuthApiError(AuthError);

impl From<AuthError> for AuthApiError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            AuthError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
