//! List file — single read-all / write-all access to one banned list.
//!
//! Decoding drops invalid UTF-8 instead of failing, so a damaged list still
//! normalizes. Output is written with one truncating write.

use crate::error::ListError;
use crate::normalizer::{normalize_with_report, render};
use crate::types::Outcome;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// What [`process`] does with the normalized list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write the normalized list back over the file.
    #[default]
    Rewrite,
    /// Only report whether the file is already normalized.
    Check,
    /// Normalize without writing; the caller decides where the entries go.
    Preview,
}

/// Decode list bytes as UTF-8, dropping invalid sequences.
///
/// A leading BOM is kept; the normalizer strips it like any other U+FEFF, so
/// a BOM-prefixed `#` line is not a comment.
pub fn decode(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Split text into lines on `\n`, `\r\n` and lone `\r`.
///
/// A terminator at the end of the text does not start another line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\n', '\r']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Read and decode `path` into raw lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ListError> {
    let bytes = fs::read(path).map_err(|e| ListError::read(path, e))?;
    Ok(split_lines(&decode(&bytes)).map(str::to_owned).collect())
}

/// Read `path` and return its normalized entries without writing anything.
pub fn load(path: &Path) -> Result<Vec<String>, ListError> {
    process(path, Mode::Preview).map(|outcome| outcome.entries)
}

/// Normalize the list at `path` according to `mode`.
///
/// In [`Mode::Rewrite`] the file is written only when its bytes differ from
/// the rendered output.
pub fn process(path: &Path, mode: Mode) -> Result<Outcome, ListError> {
    let bytes = fs::read(path).map_err(|e| ListError::read(path, e))?;
    let text = decode(&bytes);
    let (entries, report) = normalize_with_report(split_lines(&text));
    let rendered = render(&entries);
    let changed = rendered.as_bytes() != bytes.as_slice();

    debug!(path = %path.display(), ?mode, ?report, changed, "normalized banned list");

    if mode == Mode::Rewrite && changed {
        fs::write(path, rendered.as_bytes()).map_err(|e| ListError::write(path, e))?;
        info!(path = %path.display(), entries = report.entries, "rewrote banned list");
    }

    Ok(Outcome {
        path: path.to_path_buf(),
        entries,
        report,
        changed,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
