use anyhow::Result;

use crate::settings::{Settings, load_settings};
use crate::vimrc;

/// CLI command: add a plugin declaration to the configured vimrc.
///
/// The declaration goes where the selected manager puts it (appended at the
/// end for Vundle/NeoBundle, after the `call dein#begin` line for dein.vim)
/// and the vimrc is rewritten in full.
///
/// # Errors
/// Returns an error if the settings cannot be loaded, the manager type is
/// unknown, or the vimrc cannot be read or rewritten. The manager type is
/// checked before the vimrc is opened.
pub fn cmd_add(name: &str) -> Result<()> {
    run(&load_settings()?, name)
}

fn run(settings: &Settings, name: &str) -> Result<()> {
    let manager = settings.manager_kind()?.manager();
    let path = settings.vimrc()?;
    let lines = vimrc::read_lines(&path)?;
    vimrc::write_lines(&path, &manager.add(lines, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn settings_for(path: &Path, manager_type: &str) -> Settings {
        Settings {
            vimrc_path: path.to_string_lossy().into_owned(),
            manager_type: manager_type.to_string(),
        }
    }

    #[test]
    fn appends_to_the_configured_vimrc() {
        let td = tempdir().unwrap();
        let path = td.path().join("vimrc");
        fs::write(&path, "set number\n").unwrap();

        run(&settings_for(&path, "Vundle"), "foo").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "set number\nBundle 'foo'"
        );
    }

    #[test]
    fn inserts_inside_the_dein_block() {
        let td = tempdir().unwrap();
        let path = td.path().join("vimrc");
        fs::write(&path, "call dein#begin()\ncall dein#end()\n").unwrap();

        run(&settings_for(&path, "dein.vim"), "foo").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "call dein#begin()\ncall dein#add('foo')\ncall dein#end()"
        );
    }

    #[test]
    fn unknown_manager_type_leaves_the_vimrc_untouched() {
        let td = tempdir().unwrap();
        let path = td.path().join("vimrc");
        fs::write(&path, "set number\n").unwrap();

        assert!(run(&settings_for(&path, "Pathogen"), "foo").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "set number\n");
    }

    #[test]
    fn missing_vimrc_is_an_error() {
        let td = tempdir().unwrap();
        let path = td.path().join("no_such_vimrc");
        assert!(run(&settings_for(&path, "Vundle"), "foo").is_err());
    }
}
