//! Password digests and generated passwords.

use rand::{distr::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

/// Length of passwords generated by administrator resets
pub const GENERATED_PASSWORD_LENGTH: usize = 12;

/// Hash a password using SHA-256, returning the lowercase hex digest
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check a plain text password against a stored digest
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    hash_password(password) == password_hash
}

/// Generate a random alphanumeric password
pub fn generate_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}
