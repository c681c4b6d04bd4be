//! The in-memory master session key.

use zeroize::Zeroize;

use crate::crypto::kdf::KEY_LEN;

/// A wrapper around the 32-byte master key that automatically zeroes
/// its memory when dropped.
///
/// This is the only place the derived key lives while the vault is
/// unlocked; locking the vault drops it.  It is never written to disk
/// or logs.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct MasterKey {
    bytes: [u8; KEY_LEN],
}

impl MasterKey {
    /// Create a new `MasterKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
