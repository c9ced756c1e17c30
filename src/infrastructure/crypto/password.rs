//! Password hashing utilities
//!
//! bcrypt only looks at the first 72 bytes of its input. The non-truncating
//! variants reject longer input instead of silently ignoring the tail.

use bcrypt::{non_truncating_hash, non_truncating_verify, DEFAULT_COST};

/// Longest password bcrypt can hash without truncation
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash a password using bcrypt with a random salt
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    non_truncating_hash(password, DEFAULT_COST)
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    non_truncating_verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "secure_password_123";
        let hashed = hash_password(password).unwrap();

        assert_ne!(hashed, password);
        assert!(hashed.starts_with("$2"));
        assert!(verify_password(password, &hashed).unwrap());
        assert!(!verify_password("wrong_password", &hashed).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("pw", "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn input_past_72_bytes_is_not_truncated() {
        let exact = "a".repeat(MAX_PASSWORD_BYTES);
        let hashed = hash_password(&exact).unwrap();
        assert!(verify_password(&exact, &hashed).unwrap());

        let longer = format!("{}-tail", exact);
        assert!(hash_password(&longer).is_err());
        assert!(!verify_password(&longer, &hashed).unwrap_or(false));
    }
}
