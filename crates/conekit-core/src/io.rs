//! File I/O helpers for G-code streams.

use std::fs;
use std::path::Path;

use crate::error::{GcodeError, Result};

/// Read a G-code file into lines. Handles CRLF input; blank lines are kept
/// so the output stream mirrors the input's layout.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| GcodeError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Write a block of G-code text, ensuring a trailing newline.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    let mut out = text.to_string();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    fs::write(path, out).map_err(|source| GcodeError::WriteFailed {
        path: path.display().to_string(),
        source,
    })
}
