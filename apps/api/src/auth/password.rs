//! One-way password verifiers (argon2id PHC strings).
//! Raw passwords are hashed immediately and never stored or logged.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::AppError;

/// Derives a salted one-way verifier from a raw password.
pub fn hash(raw: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?
        .to_string())
}

/// Checks a raw password against a stored verifier.
/// An unparseable stored hash counts as a mismatch, not an error.
pub fn verify(raw: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .map(|parsed| {
            Argon2::default()
                .verify_password(raw.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify_round_trip() {
        let hashed = hash("secret1").unwrap();
        assert!(verify("secret1", &hashed));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hashed = hash("secret1").unwrap();
        assert!(!verify("secret2", &hashed));
    }

    #[test]
    fn test_hashes_are_salted() {
        assert_ne!(hash("secret1").unwrap(), hash("secret1").unwrap());
    }

    #[test]
    fn test_garbage_stored_hash_is_mismatch() {
        assert!(!verify("secret1", "not-a-phc-string"));
    }
}
