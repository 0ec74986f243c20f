//! # kirimori
//!
//! **kirimori** is a small tool that manages vim plugin declarations in a
//! vimrc.
//!
//! Features:
//! - Edits the vimrc named in `~/.kirimori.toml`
//! - `kirimori init` creates the settings file
//! - `kirimori add <name>` inserts the plugin declaration
//! - `kirimori remove <name>` rewrites the vimrc without the declaration
//! - `kirimori list` prints declared plugins, one per line
//!
//! The `ManagerType` settings key selects one of three plugin-manager
//! conventions: Vundle, NeoBundle or dein.vim.
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use anyhow::Result;
use clap::{Parser, Subcommand};
use kirimori::{cmd_add, cmd_init, cmd_list, cmd_remove};

/// Command-line interface definition.
///
/// Parsed using `clap` derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "kirimori",
    version,
    about = "kirimori - vim plugin declaration manager",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

/// Available subcommands.
///
/// Each variant corresponds to a subcommand of `kirimori`.
#[derive(Subcommand, Debug)]
enum Cmd {
    /// Create the settings file (~/.kirimori.toml)
    #[command(visible_alias = "i")]
    Init,
    /// Add a plugin declaration to the vimrc
    #[command(visible_alias = "a")]
    Add {
        /// Plugin name, inserted verbatim into the declaration
        name: String,
    },
    /// Remove a plugin declaration from the vimrc
    #[command(visible_alias = "r")]
    Remove {
        /// Plugin name the declaration was added with
        name: String,
    },
    /// List plugin declarations found in the vimrc
    #[command(visible_alias = "l")]
    List,
}

/// CLI entry point.
///
/// Parses arguments with `clap` and executes the selected subcommand.
/// Every failure propagates here; the process exits non-zero with a
/// one-line error on stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let cmd = cli.cmd.unwrap();

    match cmd {
        Cmd::Init => cmd_init(),
        Cmd::Add { name } => cmd_add(&name),
        Cmd::Remove { name } => cmd_remove(&name),
        Cmd::List => cmd_list(),
    }
}
