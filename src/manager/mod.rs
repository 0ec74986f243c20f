//! Plugin-manager conventions.
//!
//! Each supported manager spells a plugin declaration differently inside the
//! vimrc. The [`Manager`] trait captures what varies (declaration syntax,
//! list extraction, where new declarations go); the line scans themselves are
//! shared provided methods so the three conventions do not each carry their
//! own loop.

mod dein;
mod neobundle;
mod vundle;

pub use dein::Dein;
pub use neobundle::NeoBundle;
pub use vundle::Vundle;

/// One plugin-manager text convention.
///
/// All operations are pure transforms over the vimrc's lines (one `String`
/// per physical line, terminators stripped). Nothing here touches the file
/// system.
pub trait Manager {
    /// Render the declaration line for `name`.
    ///
    /// The name is inserted verbatim; a name containing the convention's
    /// quote or delimiter characters produces a corrupt declaration.
    fn decl(&self, name: &str) -> String;

    /// Extract the plugin name from a declaration line, or `None` when the
    /// line declares nothing under this convention.
    fn list_entry(&self, line: &str) -> Option<String>;

    /// Substring marking the line after which new declarations are inserted.
    ///
    /// `None` means declarations are appended at the end of the file.
    fn anchor(&self) -> Option<&'static str> {
        None
    }

    /// Whether `line` carries the declaration for `name`.
    fn matches(&self, line: &str, name: &str) -> bool {
        line.contains(self.decl(name).as_str())
    }

    /// Insert the declaration for `name` into `lines`.
    ///
    /// With an [`anchor`](Manager::anchor), the declaration is inserted
    /// right after every line containing it; a file without any anchor line
    /// comes back unchanged. Without an anchor, the declaration is appended
    /// as the last line.
    fn add(&self, mut lines: Vec<String>, name: &str) -> Vec<String> {
        match self.anchor() {
            Some(anchor) => {
                let decl = self.decl(name);
                let mut out = Vec::with_capacity(lines.len() + 1);
                for line in lines {
                    let hit = line.contains(anchor);
                    out.push(line);
                    if hit {
                        out.push(decl.clone());
                    }
                }
                out
            }
            None => {
                lines.push(self.decl(name));
                lines
            }
        }
    }

    /// Drop every line declaring `name`; all other lines keep their order.
    ///
    /// A sequence without any match comes back unchanged.
    fn remove(&self, lines: Vec<String>, name: &str) -> Vec<String> {
        lines
            .into_iter()
            .filter(|line| !self.matches(line, name))
            .collect()
    }

    /// All plugin names declared in `lines`, in line order.
    fn list(&self, lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .filter_map(|line| self.list_entry(line))
            .collect()
    }
}

/// Manager selected by the `ManagerType` settings key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerKind {
    Vundle,
    NeoBundle,
    Dein,
}

impl ManagerKind {
    /// The recognized `ManagerType` labels, in the order the settings
    /// template lists them. Note that [`ManagerKind::Dein`] is selected by
    /// the label `dein.vim`.
    pub const LABELS: [&'static str; 3] = ["NeoBundle", "Vundle", "dein.vim"];

    /// Parse a `ManagerType` label. Any string outside [`Self::LABELS`]
    /// yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Vundle" => Some(Self::Vundle),
            "NeoBundle" => Some(Self::NeoBundle),
            "dein.vim" => Some(Self::Dein),
            _ => None,
        }
    }

    /// The convention implementation behind this kind.
    pub fn manager(self) -> &'static dyn Manager {
        match self {
            Self::Vundle => &Vundle,
            Self::NeoBundle => &NeoBundle,
            Self::Dein => &Dein,
        }
    }
}
