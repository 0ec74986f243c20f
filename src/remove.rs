use anyhow::Result;

use crate::settings::{Settings, load_settings};
use crate::vimrc;

/// CLI command: remove a plugin declaration from the configured vimrc.
///
/// Every line carrying the declaration is dropped and the vimrc is
/// rewritten in full; a vimrc without the declaration is rewritten
/// unchanged. The NeoBundle mode keeps its historical rewrite instead (see
/// [`NeoBundle`](crate::NeoBundle)).
///
/// # Errors
/// Returns an error if the settings cannot be loaded, the manager type is
/// unknown, or the vimrc cannot be read or rewritten.
pub fn cmd_remove(name: &str) -> Result<()> {
    run(&load_settings()?, name)
}

fn run(settings: &Settings, name: &str) -> Result<()> {
    let manager = settings.manager_kind()?.manager();
    let path = settings.vimrc()?;
    let lines = vimrc::read_lines(&path)?;
    vimrc::write_lines(&path, &manager.remove(lines, name))
}
