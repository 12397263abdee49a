//! Salted password hashing for user accounts.
//!
//! Hashes are argon2id PHC strings. An account created without a password stores
//! [`UNUSABLE_PASSWORD`], which never verifies.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;

use crate::server::error::Error;

pub static UNUSABLE_PASSWORD: &str = "!";

/// Hash `password` with a fresh random salt, or return the unusable marker for `None`.
pub fn hash_password(password: Option<&str>) -> Result<String, Error> {
    let Some(password) = password else {
        return Ok(UNUSABLE_PASSWORD.to_string());
    };

    let mut salt_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut salt_bytes);

    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| Error::PasswordHashError(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHashError(e.to_string()))
}

/// Check `password` against a stored hash; unusable or malformed hashes never match.
pub fn verify_password(password: &str, hash: &str) -> bool {
    if hash == UNUSABLE_PASSWORD {
        return false;
    }

    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            false
        }
    }
}
