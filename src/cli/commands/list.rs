//! `passvault list` — display all entries in a table.

use crate::cli::output;
use crate::cli::{load_settings, unlock_store, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings()?;
    let store = unlock_store(cli, &settings)?;

    let records = store.list_records()?;

    output::info(&format!("{} entry(s) in the vault", records.len()));
    output::print_records_table(&records);

    Ok(())
}
