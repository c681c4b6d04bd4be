use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// User-level configuration, loaded from `~/.passvault.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.  Note that nothing about the
/// cryptography is configurable: key-derivation parameters are fixed
/// constants, because they are part of the on-disk contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Where the vault and salt files live. Defaults to `~/.passvault`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Ask before deleting an entry (default: true).
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_confirm_delete() -> bool {
    true
}

/// Directory name used under the home directory when no override is set.
const DEFAULT_DATA_DIR: &str = ".passvault";

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the base directory.
    const FILE_NAME: &'static str = ".passvault.toml";

    /// Load settings from `<base_dir>/.passvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let config_path = base_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the effective data directory given the user's home.
    pub fn resolve_data_dir(&self, home: &Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => home.join(DEFAULT_DATA_DIR),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
