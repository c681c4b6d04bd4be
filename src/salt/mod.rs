//! Salt lifecycle management.
//!
//! Every installation has exactly one 16-byte random salt, created on
//! first run and never regenerated afterwards: the salt feeds key
//! derivation, so replacing it would silently orphan every previously
//! encrypted vault.
//!
//! The salt is stored redundantly — preferred copy in the OS keyring,
//! fallback copy in a file — behind a common [`SaltBackend`] trait so
//! each backend is independently testable and the fallback policy is
//! plain control flow rather than exception shape.

pub mod file;

#[cfg(feature = "keyring-store")]
pub mod keyring;

use subtle::ConstantTimeEq;

use crate::crypto::kdf::{generate_salt, SALT_LEN};
use crate::errors::{PassVaultError, Result};

pub use file::FileBackend;

#[cfg(feature = "keyring-store")]
pub use keyring::KeyringBackend;

/// The per-installation key-derivation salt.
pub type Salt = [u8; SALT_LEN];

/// A place where the installation salt can be stored and retrieved.
///
/// `load` must distinguish three outcomes:
/// - `Ok(Some(salt))` — a valid salt is stored here.
/// - `Ok(None)` — nothing stored here yet (or the backend is
///   unreachable and a fallback should be tried).
/// - `Err(SaltCorrupt)` — something is stored here but it is not a
///   valid salt. This is fatal: generating a replacement would lose
///   the existing vault.
pub trait SaltBackend {
    /// Read the salt stored in this backend, if any.
    fn load(&self) -> Result<Option<Salt>>;

    /// Persist the salt to this backend.
    fn store(&self, salt: &Salt) -> Result<()>;
}

/// Obtains the installation salt from an ordered list of backends,
/// creating and persisting a fresh one on first run.
pub struct SaltManager {
    backends: Vec<Box<dyn SaltBackend>>,
}

impl SaltManager {
    /// Build a manager over an explicit backend order (first = preferred).
    pub fn new(backends: Vec<Box<dyn SaltBackend>>) -> Self {
        Self { backends }
    }

    /// Build the standard resolution order: OS keyring first (when
    /// compiled in and not disabled), then the fallback file under
    /// `data_dir`.
    pub fn with_default_backends(data_dir: &std::path::Path, use_keyring: bool) -> Self {
        let mut backends: Vec<Box<dyn SaltBackend>> = Vec::new();

        #[cfg(feature = "keyring-store")]
        if use_keyring {
            backends.push(Box::new(KeyringBackend::new()));
        }
        #[cfg(not(feature = "keyring-store"))]
        let _ = use_keyring;

        backends.push(Box::new(FileBackend::new(data_dir)));
        Self { backends }
    }

    /// Return the installation salt, creating one on first run.
    ///
    /// Backends are tried in order; the first that yields a salt wins,
    /// and later backends are rewritten if their copy is missing or
    /// disagrees (so the fallback file survives keyring loss).  A
    /// corrupt copy anywhere is fatal — it is never papered over by
    /// regeneration.  Idempotent once a salt exists.
    pub fn get_or_create(&self) -> Result<Salt> {
        for (position, backend) in self.backends.iter().enumerate() {
            if let Some(salt) = backend.load()? {
                self.heal_fallbacks(position, &salt);
                return Ok(salt);
            }
        }

        // First run: no backend has a salt yet.
        let salt = generate_salt();
        let mut persisted = false;
        for backend in &self.backends {
            // Best effort per backend; at least one copy must land or
            // the next run would derive a key we can never reproduce.
            if backend.store(&salt).is_ok() {
                persisted = true;
            }
        }
        if !persisted {
            return Err(PassVaultError::SaltUnavailable);
        }
        Ok(salt)
    }

    /// Rewrite every backend after `found_at` whose copy is missing or
    /// differs from the authoritative salt. Write failures are
    /// tolerated — the authoritative copy already exists.
    fn heal_fallbacks(&self, found_at: usize, salt: &Salt) {
        for backend in &self.backends[found_at + 1..] {
            let agrees = matches!(
                backend.load(),
                Ok(Some(existing)) if bool::from(existing[..].ct_eq(&salt[..]))
            );
            if !agrees {
                let _ = backend.store(salt);
            }
        }
    }
}
