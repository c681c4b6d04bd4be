//! `passvault delete` — remove an entry from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{load_settings, unlock_store, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, service: &str, force: bool) -> Result<()> {
    let settings = load_settings()?;

    // Unless --force is set (or disabled in the config), ask for
    // confirmation before deleting.
    if !force && settings.confirm_delete {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete entry '{service}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let mut store = unlock_store(cli, &settings)?;
    store.delete_record(service)?;
    store.save()?;

    output::success(&format!("Deleted entry '{service}'"));

    Ok(())
}
