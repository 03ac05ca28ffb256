//! Membership-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | ValidationFailed | 400 |
//! | Forbidden | 403 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, ValidationError};

/// Membership-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// Referenced member does not exist.
    NotFound(MemberId),

    /// Input rejected before any store interaction.
    ValidationFailed { field: String, message: String },

    /// Caller lacks the role required for the operation.
    Forbidden,

    /// The unit of work failed to commit; nothing was persisted.
    Infrastructure(String),
}

impl MembershipError {
    pub fn not_found(id: MemberId) -> Self {
        MembershipError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn forbidden() -> Self {
        MembershipError::Forbidden
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::NotFound(_) => ErrorCode::MemberNotFound,
            MembershipError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MembershipError::Forbidden => ErrorCode::Forbidden,
            MembershipError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            MembershipError::NotFound(id) => format!("Member not found: {}", id),
            MembershipError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MembershipError::Forbidden => "Operation requires the admin role".to_string(),
            MembershipError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<ValidationError> for MembershipError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } => field.clone(),
            ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        MembershipError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                MembershipError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            ErrorCode::Forbidden => MembershipError::Forbidden,
            _ => MembershipError::Infrastructure(err.to_string()),
        }
    }
}

impl From<MembershipError> for DomainError {
    fn from(err: MembershipError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
