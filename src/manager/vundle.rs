use super::Manager;

/// The Vundle convention: `Bundle '<name>'`, appended at the end of the
/// vimrc.
pub struct Vundle;

impl Manager for Vundle {
    fn decl(&self, name: &str) -> String {
        format!("Bundle '{}'", name)
    }

    /// Lines containing `Bundle '` report a name: the first `Bundle` token
    /// and every quote are stripped, surrounding whitespace trimmed.
    fn list_entry(&self, line: &str) -> Option<String> {
        if !line.contains("Bundle '") {
            return None;
        }
        let name = line.replacen("Bundle", "", 1).replace('\'', "");
        Some(name.trim().to_string())
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
        let got = Vundle.add(lines(&["set nocompatible", "syntax on"]), "tpope/vim-surround");
        assert_eq!(
            got,
            lines(&[
                "set nocompatible",
                "syntax on",
                "Bundle 'tpope/vim-surround'",
            ])
        );
    }

    #[test]
    fn add_on_empty_vimrc_yields_single_declaration() {
        assert_eq!(Vundle.add(Vec::new(), "foo"), lines(&["Bundle 'foo'"]));
    }

    #[test]
    fn remove_drops_every_matching_line_and_keeps_order() {
        let got = Vundle.remove(
            lines(&["a", "Bundle 'foo'", "b", "Bundle 'foo'", "c"]),
            "foo",
        );
        assert_eq!(got, lines(&["a", "b", "c"]));
    }

    #[test]
    fn remove_without_match_is_a_no_op() {
        let orig = lines(&["a", "Bundle 'bar'"]);
        assert_eq!(Vundle.remove(orig.clone(), "foo"), orig);
    }

    #[test]
    fn remove_matches_the_whole_quoted_name_only() {
        let orig = lines(&["Bundle 'foobar'"]);
        assert_eq!(Vundle.remove(orig.clone(), "foo"), orig);
    }

    #[test]
    fn list_reports_names_in_line_order() {
        let got = Vundle.list(&lines(&["Bundle 'foo'", "x", "Bundle 'bar'"]));
        assert_eq!(got, vec!["foo", "bar"]);
    }

    #[test]
    fn list_strips_token_and_quotes_from_indented_lines() {
        let got = Vundle.list(&lines(&["  Bundle 'foo'  "]));
        assert_eq!(got, vec!["foo"]);
    }

    #[test]
    fn list_marker_also_catches_neobundle_lines() {
        // "NeoBundle 'x'" contains the substring "Bundle '".
        let got = Vundle.list(&lines(&["NeoBundle 'x'"]));
        assert_eq!(got, vec!["Neo x"]);
    }

    #[test]
    fn add_then_remove_round_trips() {
        let orig = lines(&["set number", "filetype off"]);
        let added = Vundle.add(orig.clone(), "foo");
        assert_eq!(Vundle.remove(added, "foo"), orig);
    }
}
