//! OS keyring-backed salt storage.
//!
//! The preferred copy of the installation salt lives in the operating
//! system's secure credential store:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring / KDE Wallet)
//!
//! The keyring stores strings, so the 16 raw salt bytes are
//! base64-encoded. An unreachable keyring reads as "nothing stored"
//! after one retry so the caller can fall back to the salt file; a
//! readable entry that does not decode to exactly 16 bytes is corrupt
//! and fatal.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{PassVaultError, Result};

use super::{Salt, SaltBackend};

/// Service name used in the OS keyring.
const SERVICE_NAME: &str = "passvault";

/// Entry name under which the salt is stored.
const SALT_ENTRY: &str = "salt";

/// Stores the salt in the OS credential store.
pub struct KeyringBackend;

impl KeyringBackend {
    pub fn new() -> Self {
        Self
    }

    fn entry() -> Result<keyring::Entry> {
        keyring::Entry::new(SERVICE_NAME, SALT_ENTRY).map_err(|e| {
            PassVaultError::KeyringError(format!("failed to create keyring entry: {e}"))
        })
    }

    /// Read the raw entry string, retrying once for transient backend
    /// errors (e.g. the keyring daemon not yet started).  A persistent
    /// failure reads as `None` so the file backend gets its turn.
    fn read_entry() -> Option<String> {
        let entry = Self::entry().ok()?;

        match entry.get_password() {
            Ok(encoded) => Some(encoded),
            Err(keyring::Error::NoEntry) => None,
            Err(_) => match entry.get_password() {
                Ok(encoded) => Some(encoded),
                Err(_) => None,
            },
        }
    }
}

impl Default for KeyringBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SaltBackend for KeyringBackend {
    fn load(&self) -> Result<Option<Salt>> {
        let Some(encoded) = Self::read_entry() else {
            return Ok(None);
        };

        // The entry exists: anything that does not decode to exactly
        // 16 bytes is corruption, never "absent".
        let bytes = BASE64
            .decode(encoded.trim())
            .map_err(|_| PassVaultError::SaltCorrupt)?;
        let salt: Salt = bytes
            .try_into()
            .map_err(|_| PassVaultError::SaltCorrupt)?;
        Ok(Some(salt))
    }

    fn store(&self, salt: &Salt) -> Result<()> {
        let entry = Self::entry()?;
        let encoded = BASE64.encode(salt);

        // One retry for transient backend errors, then surface.
        if entry.set_password(&encoded).is_ok() {
            return Ok(());
        }
        entry.set_password(&encoded).map_err(|e| {
            PassVaultError::KeyringError(format!("failed to store salt in keyring: {e}"))
        })
    }
}
