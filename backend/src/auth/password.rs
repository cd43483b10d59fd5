//! Password hashing using argon2
//!
//! New hashes are Argon2id PHC strings. Verification also accepts bcrypt
//! hashes (`$2a$`, `$2b$`, `$2y$`) carried over from the previous service.
//!
//! # Performance Considerations
//!
//! Argon2 is intentionally CPU-intensive. Use `hash_async` from
//! request handlers so hashing runs on the blocking thread pool.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::warn;

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using argon2 (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored hash (blocking operation)
    ///
    /// A hash that cannot be parsed never matches.
    pub fn verify(password: &str, hash: &str) -> bool {
        if BCRYPT_PREFIXES.iter().any(|prefix| hash.starts_with(prefix)) {
            return match bcrypt::verify(password, hash) {
                Ok(valid) => valid,
                Err(e) => {
                    warn!(error = %e, "Malformed bcrypt hash");
                    false
                }
            };
        }

        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                warn!(error = %e, "Malformed password hash");
                false
            }
        }
    }
}
