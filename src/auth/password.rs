use bcrypt::{hash, verify, BcryptError};
use thiserror::Error;

pub use bcrypt::DEFAULT_COST;

/// Lowest cost bcrypt accepts (mirrors bcrypt's private `MIN_COST`)
pub const MIN_COST: u32 = 4;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(#[source] BcryptError),

    #[error("Password verification failed: {0}")]
    Verify(#[source] BcryptError),
}

/// bcrypt digest at `cost`, stored opaque
pub fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    hash(password, cost).map_err(PasswordError::Hash)
}

/// `Ok(false)` on mismatch; `Err` only when `stored` is not a bcrypt digest
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    verify(password, stored).map_err(PasswordError::Verify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let stored = hash_password("password1", MIN_COST).unwrap();
        assert!(stored.starts_with("$2"));
        assert!(verify_password("password1", &stored).unwrap());
        assert!(!verify_password("password2", &stored).unwrap());
    }

    #[test]
    fn salts_differ() {
        assert_ne!(
            hash_password("password1", MIN_COST).unwrap(),
            hash_password("password1", MIN_COST).unwrap()
        );
    }

    #[test]
    fn digest_is_stretched_at_requested_cost() {
        let stored = hash_password("password1", MIN_COST).unwrap();
        // $2b$04$<22 char salt><31 char hash>
        assert_eq!(stored.len(), 60);
        assert_eq!(&stored[4..6], "04");
        assert!(!stored.contains("password1"));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(verify_password("password1", "password1").is_err());
        assert!(verify_password("password1", "sha256$salt$abc").is_err());
    }

    #[test]
    fn rejects_out_of_range_cost() {
        assert!(matches!(hash_password("password1", 3), Err(PasswordError::Hash(_))));
    }
}
