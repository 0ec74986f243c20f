use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read the whole vimrc into memory, one element per physical line.
///
/// Line terminators (`\n` or `\r\n`) are dropped; a trailing newline does
/// not produce a final empty element.
///
/// # Errors
/// Returns an error if the file is missing, unreadable, or not UTF-8. A
/// failed read never writes anything, so the vimrc stays untouched.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let txt = fs::read_to_string(path)
        .with_context(|| format!("vimrc not found: {}", path.display()))?;
    Ok(txt.lines().map(str::to_string).collect())
}

/// Rewrite the vimrc with `lines`, joined by `\n` and without a trailing
/// newline.
///
/// The content goes to a temporary file in the vimrc's directory which is
/// then renamed over the target, so the vimrc is either fully rewritten or
/// left as it was.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to stage rewrite of {}", path.display()))?;
    tmp.write_all(lines.join("\n").as_bytes())?;
    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
