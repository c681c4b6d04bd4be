//! File-backed salt storage.
//!
//! The fallback copy of the installation salt lives in `<data-dir>/.salt`
//! as 16 raw bytes, readable only by the owning user.

use std::fs;
use std::path::{Path, PathBuf};

use crate::crypto::kdf::SALT_LEN;
use crate::errors::{PassVaultError, Result};

use super::{Salt, SaltBackend};

/// Name of the salt file inside the data directory.
const SALT_FILE: &str = ".salt";

/// Stores the salt as a raw 16-byte file in the application data
/// directory.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SALT_FILE),
        }
    }

    /// Path of the salt file (for diagnostics and tests).
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaltBackend for FileBackend {
    fn load(&self) -> Result<Option<Salt>> {
        if !self.path.exists() {
            return Ok(None);
        }

        // A present-but-unreadable file propagates as an IO error and
        // a present-but-wrong-sized one as SaltCorrupt; neither may be
        // mistaken for "no salt yet".
        let bytes = fs::read(&self.path)?;
        let salt: Salt = bytes
            .try_into()
            .map_err(|_| PassVaultError::SaltCorrupt)?;
        Ok(Some(salt))
    }

    fn store(&self, salt: &Salt) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, salt)?;

        // On Unix, restrict permissions to owner-only read/write.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_returns_none_when_absent() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn store_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        let salt = [0xA5u8; SALT_LEN];

        backend.store(&salt).unwrap();
        assert_eq!(backend.load().unwrap(), Some(salt));
    }

    #[test]
    fn store_creates_missing_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeper").join("still");
        let backend = FileBackend::new(&nested);

        backend.store(&[1u8; SALT_LEN]).unwrap();
        assert!(backend.path().exists());
    }

    #[test]
    fn wrong_length_file_is_corrupt_not_absent() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        fs::write(backend.path(), [0u8; 7]).unwrap();

        let err = backend.load().unwrap_err();
        assert!(matches!(err, PassVaultError::SaltCorrupt));
    }

    #[cfg(unix)]
    #[test]
    fn salt_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.store(&[2u8; SALT_LEN]).unwrap();

        let mode = fs::metadata(backend.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
