//! Credentials shared by tests that log users in.

/// Plain text password of every fixture user.
pub static TEST_PASSWORD: &str = "secret";

/// Hex encoded SHA-256 digest of [`TEST_PASSWORD`], as stored in `timebook_user.password_hash`.
pub static TEST_PASSWORD_HASH: &str =
    "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b";
