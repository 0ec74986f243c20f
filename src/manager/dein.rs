use super::Manager;

/// The dein.vim convention: `call dein#add('<name>')`, inserted inside the
/// plugin block rather than appended at the end of the file.
pub struct Dein;

impl Manager for Dein {
    fn decl(&self, name: &str) -> String {
        format!("call dein#add('{}')", name)
    }

    /// New declarations go right after the `call dein#begin` block opener.
    fn anchor(&self) -> Option<&'static str> {
        Some("call dein#begin")
    }

    fn list_entry(&self, line: &str) -> Option<String> {
        if !line.contains("call dein#add") {
            return None;
        }
        let name = line
            .replacen("call dein#add", "", 1)
            .replacen("('", "", 1)
            .replacen("')", "", 1);
        Some(name.trim().to_string())
    }
}
