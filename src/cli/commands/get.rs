//! `passvault get` — retrieve a single entry's password.

use crate::cli::output;
use crate::cli::{load_settings, unlock_store, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `get` command.
pub fn execute(cli: &Cli, service: &str, copy: bool) -> Result<()> {
    let settings = load_settings()?;
    let store = unlock_store(cli, &settings)?;

    let record = store.record(service)?;

    if copy {
        // Clipboard instead of stdout keeps the password out of
        // terminal scrollback.
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| PassVaultError::CommandFailed(format!("clipboard: {e}")))?;
        clipboard
            .set_text(record.password.clone())
            .map_err(|e| PassVaultError::CommandFailed(format!("clipboard: {e}")))?;
        output::success(&format!("Password for '{service}' copied to the clipboard"));
    } else {
        println!("{}", record.password);
    }

    Ok(())
}
