//! User account entity.
//!
//! Passwords are stored as argon2 PHC strings, never plaintext.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

use super::Role;

/// An application user account, read-only for authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique identifier for this account.
    pub id: UserId,

    /// Unique login name.
    pub username: String,

    /// Argon2 PHC-format password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Role granted to this account.
    pub role: Role,
}

impl UserAccount {
    /// Creates an account from an already-hashed password.
    pub fn new(id: UserId, username: String, password_hash: String, role: Role) -> Self {
        Self {
            id,
            username,
            password_hash,
            role,
        }
    }

    /// Verify a candidate password against the stored argon2 hash.
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            password_hash::{PasswordHash, PasswordVerifier},
            Argon2,
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password with argon2 and a fresh random salt.
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
            Argon2,
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}
