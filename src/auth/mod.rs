// Credential hashing.
//
// bcrypt embeds a per-hash salt, so two hashes of the same plaintext never
// compare equal; callers that need to know whether a plaintext matches a
// stored hash must go through verify_password, and a resupplied password on
// update is simply rehashed.

use bcrypt::BcryptError;

/// Hash a plaintext credential with the configured work factor.
pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plain, crate::config::config().security.bcrypt_cost)
}

/// Verify a plaintext credential against a stored hash.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plain, hashed)
}
