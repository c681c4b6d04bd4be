//! Record types held inside a vault.
//!
//! A vault is a mapping from service name to `PasswordRecord`.  The
//! map is a `BTreeMap` so listings come out sorted without a separate
//! sort pass.  Record contents are zeroed when dropped, so locking the
//! vault does not leave plaintext credentials in freed memory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{PassVaultError, Result};

/// A single credential entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct PasswordRecord {
    /// Login name for the service.
    pub username: String,

    /// The stored password.
    pub password: String,

    /// Free-form notes. Optional on disk — older files may omit it.
    #[serde(default)]
    pub notes: String,
}

/// Non-secret listing data for a record.
///
/// Returned by `VaultStore::list_records` so callers can render an
/// overview without touching any password or note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    pub service: String,
    pub username: String,
}

/// The decrypted record set, keyed by service name.
///
/// Exists in memory only while the vault is unlocked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vault {
    records: BTreeMap<String, PasswordRecord>,
}

impl Vault {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, service: &str) -> bool {
        self.records.contains_key(service)
    }

    pub fn get(&self, service: &str) -> Option<&PasswordRecord> {
        self.records.get(service)
    }

    /// Insert a new record. Service names are unique keys.
    pub fn add(&mut self, service: &str, record: PasswordRecord) -> Result<()> {
        if self.records.contains_key(service) {
            return Err(PassVaultError::DuplicateService(service.to_string()));
        }
        self.records.insert(service.to_string(), record);
        Ok(())
    }

    /// Replace an existing record.
    pub fn update(&mut self, service: &str, record: PasswordRecord) -> Result<()> {
        match self.records.get_mut(service) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(PassVaultError::NotFound(service.to_string())),
        }
    }

    /// Remove a record.
    pub fn remove(&mut self, service: &str) -> Result<()> {
        if self.records.remove(service).is_none() {
            return Err(PassVaultError::NotFound(service.to_string()));
        }
        Ok(())
    }

    /// Iterate records in service-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PasswordRecord)> {
        self.records.iter()
    }

    /// Drop every record, zeroing their contents.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
