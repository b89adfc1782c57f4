//! Adaptive one-way password hashing backed by bcrypt.
//!
//! bcrypt only reads the first 72 bytes of its input, so passwords are
//! condensed to a SHA-256 hex string (64 bytes) before they reach it.

use sha2::{Digest, Sha256};

use crate::errors::PasswordError;

/// Hashes and verifies user passwords.
///
/// Stateless apart from the work factor. Both operations are CPU-bound
/// and slow on purpose; async callers should run them on a blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    /// Create a hasher with an explicit bcrypt cost (4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Produce a salted, self-describing digest of `password`.
    ///
    /// # Errors
    ///
    /// * `PasswordError::HashingFailed` - Invalid cost or the RNG failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(prehash(password), self.cost).map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            PasswordError::HashingFailed
        })
    }

    /// Check `password` against a stored digest.
    ///
    /// Returns `Ok(false)` on mismatch. Only a structurally invalid digest
    /// is an error.
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(prehash(password), digest).map_err(|_| PasswordError::InvalidDigest)
    }
}

fn prehash(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::with_cost(4)
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = hasher();
        let digest = hasher.hash("correcthorse").unwrap();

        assert_ne!(digest, "correcthorse");
        assert!(hasher.verify("correcthorse", &digest).unwrap());
        assert!(!hasher.verify("wrong", &digest).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = hasher();
        let first = hasher.hash("same password").unwrap();
        let second = hasher.hash("same password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("same password", &first).unwrap());
        assert!(hasher.verify("same password", &second).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_digest() {
        assert_eq!(
            hasher().verify("password", "not-a-bcrypt-digest"),
            Err(PasswordError::InvalidDigest)
        );
    }

    #[test]
    fn test_digest_records_cost() {
        let digest = hasher().hash("pw").unwrap();
        assert!(digest.starts_with("$2b$04$"));
    }

    #[test]
    fn test_invalid_cost_fails() {
        let result = PasswordHasher::with_cost(2).hash("pw");
        assert_eq!(result, Err(PasswordError::HashingFailed));
    }

    #[test]
    fn test_long_passwords_sharing_a_prefix_are_distinct() {
        let hasher = hasher();
        let prefix = "a".repeat(72);
        let first = format!("{prefix}first-suffix");
        let second = format!("{prefix}entirely-different");

        let digest = hasher.hash(&first).unwrap();
        assert!(hasher.verify(&first, &digest).unwrap());
        assert!(!hasher.verify(&second, &digest).unwrap());
        assert!(!hasher.verify(&prefix, &digest).unwrap());
    }

    #[test]
    fn test_empty_password_round_trips() {
        let hasher = hasher();
        let digest = hasher.hash("").unwrap();
        assert!(hasher.verify("", &digest).unwrap());
        assert!(!hasher.verify(" ", &digest).unwrap());
    }

    #[test]
    fn test_default_cost() {
        assert_eq!(PasswordHasher::default().cost(), bcrypt::DEFAULT_COST);
    }
}
