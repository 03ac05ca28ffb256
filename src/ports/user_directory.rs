//! User directory port.
//!
//! Read-only lookup of application accounts for authentication. The core
//! never creates or mutates accounts; they are seeded at bootstrap.

use crate::domain::foundation::DomainError;
use crate::domain::user::UserAccount;
use async_trait::async_trait;

/// Reader port for user accounts.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find an account by its unique username.
    ///
    /// Returns `None` if no such account exists.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError>;
}
