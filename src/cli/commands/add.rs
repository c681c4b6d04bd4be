//! `passvault add` — add a new entry to the vault.

use crate::cli::output;
use crate::cli::{load_settings, record_password, unlock_store, Cli};
use crate::errors::Result;

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    service: &str,
    username: &str,
    password: Option<&str>,
    notes: &str,
) -> Result<()> {
    let settings = load_settings()?;

    // Resolve the entry's password before asking for the master
    // password, so a cancelled prompt never touches the vault.
    let secret = record_password(password, service)?;

    let mut store = unlock_store(cli, &settings)?;
    store.add_record(service, username, &secret, notes)?;
    store.save()?;

    output::success(&format!(
        "Entry '{}' added ({} total)",
        service,
        store.record_count()
    ));

    Ok(())
}
