//! Integration tests for the PassVault vault store.
//!
//! Every test drives the store through a file-only salt manager so
//! nothing here ever touches the real OS keyring.

use std::fs;
use std::path::Path;

use passvault::errors::PassVaultError;
use passvault::salt::{FileBackend, SaltManager};
use passvault::vault::VaultStore;
use tempfile::TempDir;

/// Helper: build a store over `dir` with a file-only salt backend,
/// the way a second app run would.
fn store_at(dir: &Path) -> VaultStore {
    let salts = SaltManager::new(vec![Box::new(FileBackend::new(dir))]);
    VaultStore::new(dir, salts)
}

// ---------------------------------------------------------------------------
// First run
// ---------------------------------------------------------------------------

#[test]
fn first_run_unlocks_to_empty_vault() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(dir.path());

    // No vault file yet: any password unlocks an empty vault.
    store.unlock("anything-goes").expect("first-run unlock");
    assert!(store.is_unlocked());
    assert_eq!(store.record_count(), 0);
}

#[test]
fn unsaved_mutations_do_not_survive_restart() {
    let dir = TempDir::new().unwrap();

    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();
    store.add_record("github.com", "alice", "s3cr3t", "").unwrap();
    // No save() — simulate the process dying here.
    drop(store);

    let mut store2 = store_at(dir.path());
    store2.unlock("pw").unwrap();
    assert_eq!(store2.record_count(), 0);
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[test]
fn end_to_end_add_save_reopen() {
    let dir = TempDir::new().unwrap();

    // Run 1: fresh vault, add one entry, save.
    let mut store = store_at(dir.path());
    store.unlock("hunter2").expect("unlock new vault");
    assert_eq!(store.record_count(), 0);
    store
        .add_record("github.com", "alice", "s3cr3t", "")
        .unwrap();
    store.save().expect("save");
    drop(store);

    // Run 2: same password recovers exactly that record.
    let mut store2 = store_at(dir.path());
    store2.unlock("hunter2").expect("unlock existing vault");
    assert_eq!(store2.record_count(), 1);

    let record = store2.record("github.com").unwrap();
    assert_eq!(record.username, "alice");
    assert_eq!(record.password, "s3cr3t");
    assert_eq!(record.notes, "");

    // Run 3: the wrong password must fail, not silently parse.
    let mut store3 = store_at(dir.path());
    let err = store3.unlock("wrongpw").unwrap_err();
    assert!(
        matches!(
            err,
            PassVaultError::WrongPassword | PassVaultError::CorruptVault
        ),
        "unexpected error: {err:?}"
    );
    assert!(!store3.is_unlocked());
}

#[test]
fn unicode_fields_roundtrip_through_disk() {
    let dir = TempDir::new().unwrap();

    let mut store = store_at(dir.path());
    store.unlock("pässwörd").unwrap();
    store
        .add_record("bücherei.example", "grüße", "geheim→🔐", "Zweites Konto")
        .unwrap();
    store.save().unwrap();
    drop(store);

    let mut store2 = store_at(dir.path());
    store2.unlock("pässwörd").unwrap();
    let record = store2.record("bücherei.example").unwrap();
    assert_eq!(record.username, "grüße");
    assert_eq!(record.password, "geheim→🔐");
    assert_eq!(record.notes, "Zweites Konto");
}

// ---------------------------------------------------------------------------
// Record operations
// ---------------------------------------------------------------------------

#[test]
fn add_duplicate_service_fails() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();

    store.add_record("mail", "a", "1", "").unwrap();
    let err = store.add_record("mail", "b", "2", "").unwrap_err();
    assert!(matches!(err, PassVaultError::DuplicateService(_)));

    // The original record is untouched.
    assert_eq!(store.record("mail").unwrap().username, "a");
}

#[test]
fn update_changes_all_fields() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();

    store.add_record("mail", "old", "old-pw", "old note").unwrap();
    store
        .update_record("mail", "new", "new-pw", "new note")
        .unwrap();

    let record = store.record("mail").unwrap();
    assert_eq!(record.username, "new");
    assert_eq!(record.password, "new-pw");
    assert_eq!(record.notes, "new note");
}

#[test]
fn update_missing_service_fails() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();

    let err = store.update_record("nope", "u", "p", "").unwrap_err();
    assert!(matches!(err, PassVaultError::NotFound(_)));
}

#[test]
fn delete_removes_record() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();

    store.add_record("to-delete", "u", "p", "").unwrap();
    store.add_record("to-keep", "u", "p", "").unwrap();

    store.delete_record("to-delete").unwrap();
    assert_eq!(store.record_count(), 1);
    assert!(store.record("to-delete").is_err());

    // Deleting again fails.
    let err = store.delete_record("to-delete").unwrap_err();
    assert!(matches!(err, PassVaultError::NotFound(_)));

    assert!(store.record("to-keep").is_ok());
}

#[test]
fn list_records_is_sorted_and_secret_free() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();

    store.add_record("zebra.example", "zu", "zp", "").unwrap();
    store.add_record("alpha.example", "au", "ap", "").unwrap();
    store.add_record("mid.example", "mu", "mp", "").unwrap();

    let list = store.list_records().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].service, "alpha.example");
    assert_eq!(list[1].service, "mid.example");
    assert_eq!(list[2].service, "zebra.example");
    assert_eq!(list[0].username, "au");
}

#[test]
fn empty_service_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();

    assert!(store.add_record("", "u", "p", "").is_err());
    assert!(store.add_record("   ", "u", "p", "").is_err());
}

// ---------------------------------------------------------------------------
// Locking
// ---------------------------------------------------------------------------

#[test]
fn operations_require_an_unlocked_vault() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(dir.path());

    assert!(matches!(
        store.add_record("svc", "u", "p", "").unwrap_err(),
        PassVaultError::VaultLocked
    ));
    assert!(matches!(
        store.record("svc").unwrap_err(),
        PassVaultError::VaultLocked
    ));
    assert!(matches!(
        store.list_records().unwrap_err(),
        PassVaultError::VaultLocked
    ));
    assert!(matches!(
        store.save().unwrap_err(),
        PassVaultError::VaultLocked
    ));
}

#[test]
fn lock_discards_session_and_records() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();
    store.add_record("svc", "u", "p", "").unwrap();

    store.lock();

    assert!(!store.is_unlocked());
    assert_eq!(store.record_count(), 0);
    assert!(matches!(
        store.record("svc").unwrap_err(),
        PassVaultError::VaultLocked
    ));

    // Unlocking again restores access to whatever was saved (nothing).
    store.unlock("pw").unwrap();
    assert_eq!(store.record_count(), 0);
}

// ---------------------------------------------------------------------------
// Damaged vault files
// ---------------------------------------------------------------------------

#[test]
fn empty_vault_file_is_corrupt_not_new() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("passwords.enc"), b"").unwrap();

    let mut store = store_at(dir.path());
    let err = store.unlock("pw").unwrap_err();
    assert!(matches!(err, PassVaultError::CorruptVault));
}

#[test]
fn short_garbage_file_is_corrupt() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("passwords.enc"), b"not a vault").unwrap();

    let mut store = store_at(dir.path());
    let err = store.unlock("pw").unwrap_err();
    assert!(matches!(err, PassVaultError::CorruptVault));
}

#[test]
fn wrong_password_and_corruption_share_one_message() {
    // The user-facing message must not leak which of the two happened.
    assert_eq!(
        PassVaultError::WrongPassword.to_string(),
        PassVaultError::CorruptVault.to_string()
    );
}

// ---------------------------------------------------------------------------
// Atomic persistence
// ---------------------------------------------------------------------------

#[test]
fn stale_temp_file_never_corrupts_the_vault() {
    let dir = TempDir::new().unwrap();

    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();
    store.add_record("svc", "u", "p", "").unwrap();
    store.save().unwrap();
    drop(store);

    // Simulate a crash that died after writing the temp file but
    // before the rename: a half-written temp must be invisible to the
    // next run.
    fs::write(dir.path().join(".passwords.enc.tmp"), b"half-written garbage").unwrap();

    let mut store2 = store_at(dir.path());
    store2.unlock("pw").expect("vault must still load");
    assert_eq!(store2.record_count(), 1);

    // And the next save replaces the vault cleanly.
    store2.add_record("other", "u", "p", "").unwrap();
    store2.save().unwrap();
    drop(store2);

    let mut store3 = store_at(dir.path());
    store3.unlock("pw").unwrap();
    assert_eq!(store3.record_count(), 2);
}

#[test]
fn save_is_a_full_rewrite() {
    let dir = TempDir::new().unwrap();

    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();
    store.add_record("a", "u", "p", "").unwrap();
    store.save().unwrap();
    let first = fs::read(dir.path().join("passwords.enc")).unwrap();

    store.delete_record("a").unwrap();
    store.add_record("b", "u", "p", "").unwrap();
    store.save().unwrap();
    let second = fs::read(dir.path().join("passwords.enc")).unwrap();

    // Fresh IV and fresh content every time.
    assert_ne!(first, second);

    let mut store2 = store_at(dir.path());
    store2.unlock("pw").unwrap();
    assert!(store2.record("a").is_err());
    assert!(store2.record("b").is_ok());
}

// ---------------------------------------------------------------------------
// Salt lifecycle through the store
// ---------------------------------------------------------------------------

#[test]
fn salt_survives_across_runs() {
    let dir = TempDir::new().unwrap();

    // First run creates the salt as a side effect of unlocking.
    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();
    store.add_record("svc", "u", "p", "").unwrap();
    store.save().unwrap();
    drop(store);

    let salt_file = dir.path().join(".salt");
    assert!(salt_file.exists());
    let salt_before = fs::read(&salt_file).unwrap();

    // Second run must reuse it — otherwise the vault would be orphaned.
    let mut store2 = store_at(dir.path());
    store2.unlock("pw").expect("same salt, same key");
    assert_eq!(store2.record_count(), 1);
    assert_eq!(fs::read(&salt_file).unwrap(), salt_before);
}

#[test]
fn corrupt_salt_file_aborts_unlock() {
    let dir = TempDir::new().unwrap();

    let mut store = store_at(dir.path());
    store.unlock("pw").unwrap();
    store.save().unwrap();
    drop(store);

    // Truncate the salt file: refusing to unlock beats deriving a key
    // from a wrong salt (which would just look like a bad password).
    fs::write(dir.path().join(".salt"), b"short").unwrap();

    let mut store2 = store_at(dir.path());
    let err = store2.unlock("pw").unwrap_err();
    assert!(matches!(err, PassVaultError::SaltCorrupt));
}
