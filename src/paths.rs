use std::env;
use std::path::{Path, PathBuf};

/// File name of the settings file, created directly under `$HOME`.
pub const SETTINGS_FILE: &str = ".kirimori.toml";

pub fn home_dir() -> PathBuf {
    PathBuf::from(env::var_os("HOME").unwrap_or_default())
}

pub fn settings_path() -> PathBuf {
    home_dir().join(SETTINGS_FILE)
}

/// Expand `~` in a configured path to the home directory.
/// Only the first occurrence is replaced.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    PathBuf::from(path.replacen('~', &home.to_string_lossy(), 1))
}
