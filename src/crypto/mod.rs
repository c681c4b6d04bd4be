//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-CBC encryption and decryption with PKCS#7 padding (`cipher`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - The zeroize-on-drop master key wrapper (`keys`)

pub mod cipher;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_master_key, ...};
pub use cipher::{decrypt, encrypt};
pub use kdf::{derive_master_key, generate_salt};
pub use keys::MasterKey;
