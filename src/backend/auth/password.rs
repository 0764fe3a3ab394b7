/**
 * Password Hashing and Verification
 *
 * Thin wrapper around bcrypt. Stored hashes carry their own salt and cost,
 * and bcrypt compares digests in constant time.
 *
 * Verification reports a plain `bool`: a wrong password and an unreadable
 * stored hash both come back as `false` so callers cannot tell them apart.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Check `plaintext` against a stored bcrypt hash
///
/// Returns `false` for a mismatch and for a malformed `stored_hash` alike.
/// This is CPU-bound by design; async callers should run it on a blocking
/// thread.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    verify(plaintext, stored_hash).unwrap_or(false)
}

/// Hash a password with bcrypt's default cost and a fresh random salt
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Hash a password with an explicit bcrypt cost (4..=31)
pub fn hash_password_with_cost(plaintext: &str, cost: u32) -> Result<String, BcryptError> {
    hash(plaintext, cost)
}
