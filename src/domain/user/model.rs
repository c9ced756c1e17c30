//! User domain entity
//!
//! The password is write-only: it can be assigned (which replaces the stored
//! hash with a salted bcrypt hash) and verified, never read back.

use std::convert::Infallible;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::crypto::password::{
    hash_password, verify_password, MAX_PASSWORD_BYTES,
};
use crate::shared::InfraError;

/// Reject passwords that are empty or longer than bcrypt can hash whole.
pub fn check_password(password: &str) -> DomainResult<()> {
    if password.is_empty() {
        return Err(DomainError::Validation("password: must not be empty".into()));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(DomainError::Validation(format!(
            "password: must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }
    Ok(())
}

/// User model
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub(crate) password_hash: String,
    pub is_admin: bool,
    pub role_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Always fails: the password is write-only.
    pub fn password(&self) -> DomainResult<Infallible> {
        Err(DomainError::PasswordNotReadable)
    }

    /// Replace the stored hash with a fresh salted hash of `password`.
    pub fn set_password(&mut self, password: &str) -> DomainResult<()> {
        check_password(password)?;
        self.password_hash = hash_password(password).map_err(InfraError::from)?;
        Ok(())
    }

    /// Check `password` against the stored hash. A malformed stored hash
    /// verifies as false.
    pub fn verify_password(&self, password: &str) -> bool {
        verify_password(password, &self.password_hash).unwrap_or(false)
    }

    /// The stored one-way hash.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User: username={}>", self.username)
    }
}
