//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// PassVault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local encrypted password vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory for the vault and salt files (default: ~/.passvault)
    #[arg(long, global = true, env = "PASSVAULT_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Skip the OS keyring and keep the salt only in the data directory
    #[arg(long, global = true)]
    pub no_keyring: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a new entry
    Add {
        /// Service or website name (unique key)
        service: String,

        /// Login name for the service
        #[arg(short, long)]
        username: String,

        /// Password to store (omit for interactive prompt)
        #[arg(short, long)]
        password: Option<String>,

        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Print an entry's password
    Get {
        /// Service name
        service: String,

        /// Copy the password to the clipboard instead of printing it
        #[arg(long)]
        copy: bool,
    },

    /// List all entries (passwords are never shown)
    List,

    /// Update an existing entry
    Update {
        /// Service name of the entry to update
        service: String,

        /// New login name
        #[arg(short, long)]
        username: String,

        /// New password (omit for interactive prompt)
        #[arg(short, long)]
        password: Option<String>,

        /// New notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Delete an entry
    Delete {
        /// Service name of the entry to delete
        service: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load user settings from the home directory.
pub fn load_settings() -> Result<Settings> {
    match dirs::home_dir() {
        Some(home) => Settings::load(&home),
        None => Ok(Settings::default()),
    }
}

/// Resolve the data directory: `--data-dir` / `PASSVAULT_DIR` wins,
/// then the config file, then `~/.passvault`.
pub fn data_dir(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }

    let home = dirs::home_dir().ok_or_else(|| {
        PassVaultError::ConfigError("cannot determine the home directory".into())
    })?;
    Ok(settings.resolve_data_dir(&home))
}

/// Get the master password, trying in order:
/// 1. `PASSVAULT_PASSWORD` env var (scripts/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_master_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Master password")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Build a store for the resolved data directory and unlock it with
/// the master password.
pub fn unlock_store(cli: &Cli, settings: &Settings) -> Result<VaultStore> {
    let dir = data_dir(cli, settings)?;
    let mut store = VaultStore::open_default(&dir, !cli.no_keyring);

    let password = prompt_master_password()?;
    store.unlock(&password)?;
    Ok(store)
}

/// Determine a record's password from one of three sources: inline
/// flag value, piped stdin, or an interactive prompt.
pub fn record_password(inline: Option<&str>, service: &str) -> Result<Zeroizing<String>> {
    if let Some(v) = inline {
        // Inline values are convenient for scripts but land in shell
        // history; say so once.
        output::warning("Password provided on command line — it may appear in shell history.");
        return Ok(Zeroizing::new(v.to_string()));
    }

    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(Zeroizing::new(buf.trim_end().to_string()));
    }

    let pw = dialoguer::Password::new()
        .with_prompt(format!("Password for {service}"))
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}
