use thiserror::Error;

/// All errors that can occur in PassVault.
///
/// `WrongPassword` and `CorruptVault` intentionally share the same
/// display text: the message shown to the user must not reveal whether
/// a failed unlock was caused by a bad password or by damaged
/// ciphertext. The variants stay separate so diagnostics can tell
/// them apart.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Salt errors ---
    #[error("No salt available — could not read or create an installation salt")]
    SaltUnavailable,

    #[error("Stored salt is unreadable or corrupt — refusing to regenerate (existing vault data would be lost)")]
    SaltCorrupt,

    // --- Crypto / unlock errors ---
    #[error("Unable to unlock vault — wrong master password or corrupted data")]
    WrongPassword,

    #[error("Unable to unlock vault — wrong master password or corrupted data")]
    CorruptVault,

    // --- Record errors ---
    #[error("An entry for '{0}' already exists (use `update` to change it)")]
    DuplicateService(String),

    #[error("No entry found for '{0}'")]
    NotFound(String),

    #[error("Vault is locked — unlock it with the master password first")]
    VaultLocked,

    // --- Keyring errors ---
    #[error("Keyring error: {0}")]
    KeyringError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
