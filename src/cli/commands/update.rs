//! `passvault update` — replace an existing entry.

use crate::cli::output;
use crate::cli::{load_settings, record_password, unlock_store, Cli};
use crate::errors::Result;

/// Execute the `update` command.
pub fn execute(
    cli: &Cli,
    service: &str,
    username: &str,
    password: Option<&str>,
    notes: &str,
) -> Result<()> {
    let settings = load_settings()?;

    let secret = record_password(password, service)?;

    let mut store = unlock_store(cli, &settings)?;
    store.update_record(service, username, &secret, notes)?;
    store.save()?;

    output::success(&format!("Entry '{service}' updated"));

    Ok(())
}
