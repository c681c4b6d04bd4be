//! Vault module — the encrypted credential store.
//!
//! This module provides:
//! - `PasswordRecord`, `RecordSummary`, and the in-memory `Vault` map (`record`)
//! - JSON (de)serialization of the record set (`codec`)
//! - High-level `VaultStore` for unlocking, mutating, and persisting vaults (`store`)

pub mod codec;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use record::{PasswordRecord, RecordSummary, Vault};
pub use store::VaultStore;
