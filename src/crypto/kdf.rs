//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is a fixed constant: it is part of the on-disk
//! contract (the same password + salt must always derive the same key,
//! across versions and machines), so it is deliberately not exposed in
//! any configuration.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count. Deliberately slow — hundreds of
/// milliseconds per derivation — to make brute-forcing the master
/// password expensive.
const ITERATIONS: u32 = 100_000;

/// Derive a 32-byte master key from a password and salt.
///
/// Deterministic: the same password + salt always produce the same
/// key. This is what makes previously encrypted vaults decryptable.
pub fn derive_master_key(password: &str, salt: &[u8; SALT_LEN]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, ITERATIONS, &mut key);
    key
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}
