//! AuthenticateUserHandler - Command handler for credential verification.
//!
//! Session issuance stays with the external request layer; this handler
//! only verifies credentials and returns the explicit principal that all
//! other operations take as a parameter.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{AuthError, Role};
use crate::ports::UserDirectory;

/// Command carrying login credentials.
#[derive(Debug, Clone)]
pub struct AuthenticateUserCommand {
    pub username: String,
    pub password: String,
}

/// The verified principal handed back to the request layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
}

/// Handler verifying credentials against the user directory.
pub struct AuthenticateUserHandler {
    directory: Arc<dyn UserDirectory>,
}

impl AuthenticateUserHandler {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        cmd: AuthenticateUserCommand,
    ) -> Result<AuthenticatedPrincipal, AuthError> {
        let account = self
            .directory
            .find_by_username(&cmd.username)
            .await?
            .ok_or_else(AuthError::invalid_credentials)?;

        let password_valid = account
            .verify_password(&cmd.password)
            .map_err(|e| AuthError::infrastructure(format!("Password verification failed: {}", e)))?;

        if !password_valid {
            return Err(AuthError::invalid_credentials());
        }

        Ok(AuthenticatedPrincipal {
            user_id: account.id,
            username: account.username,
            role: account.role,
        })
    }
}
