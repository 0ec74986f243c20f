use anyhow::Result;

use crate::settings::{Settings, load_settings};
use crate::vimrc;

/// CLI command: print the plugin names declared in the configured vimrc,
/// one per line, in the order they appear.
///
/// Example output:
/// ```text
/// tpope/vim-surround
/// scrooloose/nerdtree
/// ```
///
/// # Errors
/// Returns an error if the settings cannot be loaded, the manager type is
/// unknown, or the vimrc cannot be read.
pub fn cmd_list() -> Result<()> {
    for name in run(&load_settings()?)? {
        println!("{}", name);
    }
    Ok(())
}

fn run(settings: &Settings) -> Result<Vec<String>> {
    let manager = settings.manager_kind()?.manager();
    let lines = vimrc::read_lines(&settings.vimrc()?)?;
    Ok(manager.list(&lines))
}
