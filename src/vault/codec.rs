//! Plaintext vault (de)serialization.
//!
//! The decrypted vault body is a pretty-printed JSON object mapping
//! service name to record:
//!
//! ```json
//! {
//!   "github.com": {
//!     "username": "alice",
//!     "password": "s3cr3t",
//!     "notes": ""
//!   }
//! }
//! ```
//!
//! Parse failure here is the primary wrong-password signal: decrypting
//! with the wrong key yields bytes that do not form this structure.
//! The caller must therefore treat a format error from `deserialize`
//! the same as a padding failure, and must handle "no vault file yet"
//! explicitly instead of inferring it from a parse error.

use crate::errors::{PassVaultError, Result};

use super::record::Vault;

/// Serialize the full record set to JSON bytes.
pub fn serialize(vault: &Vault) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(vault)
        .map_err(|e| PassVaultError::SerializationError(format!("vault encode: {e}")))
}

/// Parse JSON bytes back into a record set.
pub fn deserialize(bytes: &[u8]) -> Result<Vault> {
    serde_json::from_slice(bytes)
        .map_err(|e| PassVaultError::SerializationError(format!("vault decode: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::record::PasswordRecord;

    fn record(username: &str, password: &str, notes: &str) -> PasswordRecord {
        PasswordRecord {
            username: username.to_string(),
            password: password.to_string(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn roundtrip_preserves_all_fields() {
        let mut vault = Vault::default();
        vault
            .add("github.com", record("alice", "s3cr3t", "work account"))
            .unwrap();
        vault
            .add("mail", record("alice@example.org", "hunter2", ""))
            .unwrap();

        let bytes = serialize(&vault).unwrap();
        let parsed = deserialize(&bytes).unwrap();
        assert_eq!(parsed, vault);
    }

    #[test]
    fn roundtrip_empty_vault() {
        let vault = Vault::default();
        let parsed = deserialize(&serialize(&vault).unwrap()).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn roundtrip_unicode_and_empty_strings() {
        let mut vault = Vault::default();
        vault
            .add("bücherei.example", record("grüße", "pässwörter→🔐", ""))
            .unwrap();

        let parsed = deserialize(&serialize(&vault).unwrap()).unwrap();
        let rec = parsed.get("bücherei.example").unwrap();
        assert_eq!(rec.username, "grüße");
        assert_eq!(rec.password, "pässwörter→🔐");
        assert_eq!(rec.notes, "");
    }

    #[test]
    fn missing_notes_field_defaults_to_empty() {
        let json = br#"{"svc": {"username": "u", "password": "p"}}"#;
        let parsed = deserialize(json).unwrap();
        assert_eq!(parsed.get("svc").unwrap().notes, "");
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        assert!(deserialize(b"\x9c\x02garbage").is_err());
        assert!(deserialize(b"").is_err());
        assert!(deserialize(b"[1, 2, 3]").is_err());
    }
}
