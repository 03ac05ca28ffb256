//! PostgreSQL implementation of UserDirectory.

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{Role, UserAccount};
use crate::ports::UserDirectory;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the UserDirectory port.
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    /// Creates a new PostgresUserDirectory with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user account.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    role: String,
}

impl TryFrom<UserRow> for UserAccount {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid role value: {}", row.role),
            )
        })?;

        Ok(UserAccount::new(
            UserId::from_uuid(row.id),
            row.username,
            row.password_hash,
            role,
        ))
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, role
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find user: {}", e),
            )
        })?;

        row.map(UserAccount::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_row_converts_to_account() {
        let row = UserRow {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: "admin".to_string(),
        };

        let account = UserAccount::try_from(row).unwrap();
        assert_eq!(account.username, "admin");
        assert_eq!(account.role, Role::Admin);
    }

    #[test]
    fn user_row_with_bad_role_fails_conversion() {
        let row = UserRow {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: "root".to_string(),
        };

        assert!(UserAccount::try_from(row).is_err());
    }
}
