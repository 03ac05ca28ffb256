//! Demo account seeding.
//!
//! Development convenience only, gated behind the
//! `database.seed_demo_accounts` config flag. Accounts are inserted with
//! argon2 hashes; nothing is seeded if any user already exists.

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{Role, UserAccount};
use sqlx::PgPool;

/// Seeds the demo `admin` and `user` accounts when the users table is
/// empty.
pub async fn seed_demo_accounts(pool: &PgPool) -> Result<(), DomainError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to count users: {}", e),
            )
        })?;

    if count > 0 {
        return Ok(());
    }

    let accounts = [
        ("admin", "admin123", Role::Admin),
        ("user", "user123", Role::User),
    ];

    for (username, password, role) in accounts {
        let password_hash = UserAccount::hash_password(password).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to hash seed password: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, role)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(UserId::new().as_uuid())
        .bind(username)
        .bind(&password_hash)
        .bind(role.label())
        .execute(pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to seed account '{}': {}", username, e),
            )
        })?;
    }

    tracing::info!("seeded demo accounts");
    Ok(())
}
