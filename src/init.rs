use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::paths::settings_path;
use crate::settings::default_settings_text;

/// CLI command: create the settings file under `$HOME`.
///
/// Writes the commented template and prints the created path. An existing
/// settings file is never overwritten.
///
/// # Errors
/// Returns an error if the settings file already exists or cannot be
/// written.
pub fn cmd_init() -> Result<()> {
    let path = settings_path();
    create_settings_file(&path)?;
    println!("created {}", path.display());
    Ok(())
}

fn create_settings_file(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("settings file already exists: {}", path.display());
    }
    fs::write(path, default_settings_text())
        .with_context(|| format!("failed to create {}", path.display()))
}
