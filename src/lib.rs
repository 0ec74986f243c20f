//! Crate entry point for **kirimori**.
//!
//! This library provides the internal implementation for the `kirimori` CLI.
//! Each submodule encapsulates one responsibility (settings parsing, vimrc
//! I/O, the per-manager line transforms, one module per subcommand).
//! The `pub use` re-exports make selected commands and types accessible
//! directly from the crate root.
//!
//! This file is primarily intended for developers hacking on `kirimori`.

mod add;
mod init;
mod list;
mod manager;
mod paths;
mod remove;
mod settings;
mod vimrc;

/// Re-export commonly used types and commands so they can be accessed from `kirimori::*`.
pub use add::cmd_add;
pub use init::cmd_init;
pub use list::cmd_list;
pub use manager::{Dein, Manager, ManagerKind, NeoBundle, Vundle};
pub use remove::cmd_remove;
pub use settings::{Settings, load_settings};
