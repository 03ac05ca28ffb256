//! Authentication error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while authenticating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password. The two cases are deliberately
    /// indistinguishable to the caller.
    InvalidCredentials,

    /// The user directory could not be queried.
    Infrastructure(String),
}

impl AuthError {
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AuthError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AuthError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => "Invalid username or password".to_string(),
            AuthError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AuthError {}

impl From<DomainError> for AuthError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidCredentials => AuthError::InvalidCredentials,
            _ => AuthError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_does_not_leak_cause() {
        let err = AuthError::invalid_credentials();
        assert_eq!(err.message(), "Invalid username or password");
        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    }

    #[test]
    fn infrastructure_maps_to_database_code() {
        let err = AuthError::infrastructure("pool exhausted");
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
