//! High-level vault operations used by the interactive surface.
//!
//! `VaultStore` ties the salt manager, key derivation, cipher, and
//! codec together so that callers work with simple method calls like
//! `store.add_record("github.com", "alice", "s3cr3t", "")`.
//!
//! Mutations act on the in-memory record set only; `save` persists the
//! whole set in one atomic rewrite.  Unsaved mutations do not survive
//! a restart.

use std::fs;
use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use crate::crypto::cipher::{decrypt, encrypt};
use crate::crypto::kdf::derive_master_key;
use crate::crypto::keys::MasterKey;
use crate::errors::{PassVaultError, Result};
use crate::salt::SaltManager;

use super::codec;
use super::record::{PasswordRecord, RecordSummary, Vault};

/// Name of the encrypted vault file inside the data directory.
pub const VAULT_FILE: &str = "passwords.enc";

/// The main vault handle.  Construct with `VaultStore::new`, then
/// `unlock` with the master password before using any record
/// operation.
pub struct VaultStore {
    /// Path to the encrypted vault file on disk.
    vault_file: PathBuf,

    /// Salt resolution (keyring preferred, file fallback).
    salts: SaltManager,

    /// The derived master key — present only while unlocked, zeroed
    /// on lock/drop.
    session: Option<MasterKey>,

    /// Decrypted records. Empty while locked.
    records: Vault,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a store rooted at `data_dir` with an explicit salt
    /// manager (tests inject file-only or in-memory backends here).
    pub fn new(data_dir: &Path, salts: SaltManager) -> Self {
        Self {
            vault_file: data_dir.join(VAULT_FILE),
            salts,
            session: None,
            records: Vault::default(),
        }
    }

    /// Create a store with the standard salt backends for `data_dir`.
    pub fn open_default(data_dir: &Path, use_keyring: bool) -> Self {
        Self::new(
            data_dir,
            SaltManager::with_default_backends(data_dir, use_keyring),
        )
    }

    // ------------------------------------------------------------------
    // Session lifecycle
    // ------------------------------------------------------------------

    /// Derive the session key from `master_password` and load the
    /// vault file.
    ///
    /// A missing file is the first-run case: unlock succeeds with an
    /// empty vault, and whichever password was given here is committed
    /// by the first `save`.  There is no stored verifier — a wrong
    /// password on an existing file surfaces as a decrypt or parse
    /// failure, indistinguishable from corrupted ciphertext.
    pub fn unlock(&mut self, master_password: &str) -> Result<()> {
        let salt = self.salts.get_or_create()?;
        let key = MasterKey::new(derive_master_key(master_password, &salt));

        let records = if self.vault_file.exists() {
            let container = fs::read(&self.vault_file)?;
            // An empty-but-present file is damage, not a new vault.
            if container.is_empty() {
                return Err(PassVaultError::CorruptVault);
            }

            let mut plaintext = decrypt(key.as_bytes(), &container)?;
            let parsed = codec::deserialize(&plaintext);
            plaintext.zeroize();
            parsed.map_err(|_| PassVaultError::WrongPassword)?
        } else {
            Vault::default()
        };

        self.session = Some(key);
        self.records = records;
        Ok(())
    }

    /// Discard the session key and every decrypted record.
    pub fn lock(&mut self) {
        self.session = None;
        self.records.clear();
    }

    /// Returns `true` while a master session is active.
    pub fn is_unlocked(&self) -> bool {
        self.session.is_some()
    }

    fn session(&self) -> Result<&MasterKey> {
        self.session.as_ref().ok_or(PassVaultError::VaultLocked)
    }

    // ------------------------------------------------------------------
    // Record operations
    // ------------------------------------------------------------------

    /// Add a new record. Fails with `DuplicateService` if the service
    /// name is already taken.
    pub fn add_record(
        &mut self,
        service: &str,
        username: &str,
        password: &str,
        notes: &str,
    ) -> Result<()> {
        self.session()?;
        Self::validate_service_name(service)?;
        self.records.add(service, make_record(username, password, notes))
    }

    /// Replace an existing record. Fails with `NotFound` if absent.
    pub fn update_record(
        &mut self,
        service: &str,
        username: &str,
        password: &str,
        notes: &str,
    ) -> Result<()> {
        self.session()?;
        Self::validate_service_name(service)?;
        self.records
            .update(service, make_record(username, password, notes))
    }

    /// Remove a record. Fails with `NotFound` if absent.
    pub fn delete_record(&mut self, service: &str) -> Result<()> {
        self.session()?;
        self.records.remove(service)
    }

    /// Look up one record by service name.
    pub fn record(&self, service: &str) -> Result<&PasswordRecord> {
        self.session()?;
        self.records
            .get(service)
            .ok_or_else(|| PassVaultError::NotFound(service.to_string()))
    }

    /// Non-secret summaries of every record, sorted by service name.
    pub fn list_records(&self) -> Result<Vec<RecordSummary>> {
        self.session()?;
        Ok(self
            .records
            .iter()
            .map(|(service, record)| RecordSummary {
                service: service.clone(),
                username: record.username.clone(),
            })
            .collect())
    }

    /// Number of records currently held in memory.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize, encrypt, and write the vault to disk atomically.
    ///
    /// The whole record set is rewritten on every save — there is no
    /// incremental persistence.  The write goes to a temp file in the
    /// same directory followed by a rename, so a crash mid-write never
    /// leaves a half-written vault behind.
    pub fn save(&self) -> Result<()> {
        let key = self.session()?;

        let mut plaintext = codec::serialize(&self.records)?;
        let container = encrypt(key.as_bytes(), &plaintext);
        plaintext.zeroize();

        self.write_atomic(&container)
    }

    /// Returns the path of the vault file.
    pub fn path(&self) -> &Path {
        &self.vault_file
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<()> {
        let parent = self.vault_file.parent().unwrap_or(Path::new("."));
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.vault_file
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
        ));

        fs::write(&tmp_path, bytes)?;

        // Owner-only before the file appears under its real name.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, perms)?;
        }

        fs::rename(&tmp_path, &self.vault_file)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Service names are free-form (sites, URLs, labels) but must be
    /// non-empty and of sane length.
    fn validate_service_name(service: &str) -> Result<()> {
        if service.trim().is_empty() {
            return Err(PassVaultError::CommandFailed(
                "service name cannot be empty".into(),
            ));
        }
        if service.len() > 256 {
            return Err(PassVaultError::CommandFailed(
                "service name cannot exceed 256 characters".into(),
            ));
        }
        Ok(())
    }
}

fn make_record(username: &str, password: &str, notes: &str) -> PasswordRecord {
    PasswordRecord {
        username: username.to_string(),
        password: password.to_string(),
        notes: notes.to_string(),
    }
}
