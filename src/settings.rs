use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::manager::ManagerKind;
use crate::paths::{expand_home, home_dir, settings_path};

/// Settings loaded from `~/.kirimori.toml`.
///
/// Two keys are recognized; both default to the empty string when absent so
/// the commented template written by `init` parses cleanly.
///
/// Example TOML:
/// ```toml
/// VimrcPath = "~/.vimrc"
/// ManagerType = "Vundle"
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    #[serde(default)]
    pub vimrc_path: String,
    #[serde(default)]
    pub manager_type: String,
}

impl Settings {
    /// The manager selected by `ManagerType`.
    ///
    /// # Errors
    /// - `ManagerType` is missing or empty.
    /// - `ManagerType` is none of the recognized labels; the message names
    ///   the offending value.
    pub fn manager_kind(&self) -> Result<ManagerKind> {
        if self.manager_type.is_empty() {
            bail!(
                "ManagerType is not set (expected one of: {})",
                ManagerKind::LABELS.join(", ")
            );
        }
        ManagerKind::from_label(&self.manager_type).with_context(|| {
            format!(
                "unsupported ManagerType {:?} (expected one of: {})",
                self.manager_type,
                ManagerKind::LABELS.join(", ")
            )
        })
    }

    /// Path to the vimrc named by `VimrcPath`, with `~` expanded to the
    /// home directory.
    ///
    /// # Errors
    /// Returns an error if `VimrcPath` is missing or empty.
    pub fn vimrc(&self) -> Result<PathBuf> {
        if self.vimrc_path.is_empty() {
            bail!("VimrcPath is not set in {}", settings_path().display());
        }
        Ok(expand_home(&self.vimrc_path, &home_dir()))
    }
}

/// Load and parse the settings file.
///
/// # Errors
/// - Returns an error if the settings file cannot be read; the message
///   includes the resolved path.
/// - Returns an error if parsing the TOML fails.
pub fn load_settings() -> Result<Settings> {
    let path = settings_path();
    let txt = fs::read_to_string(&path)
        .with_context(|| format!("settings not found: {}", path.display()))?;
    let settings: Settings =
        toml::from_str(&txt).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(settings)
}

/// Template written by `init`: every key commented out, one `ManagerType`
/// line per recognized label. Uncommenting one value per key makes it a
/// working settings file.
pub fn default_settings_text() -> String {
    let mut body = vec!["# VimrcPath = \"~/.vimrc\"".to_string(), String::new()];
    for label in ManagerKind::LABELS {
        body.push(format!("# ManagerType = \"{}\"", label));
    }
    body.join("\n")
}
