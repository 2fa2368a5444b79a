//! Core types for banlist-core.
//!
//! [`NormalizeReport`] carries the counters of one normalization run and
//! [`Outcome`] ties them to the list file they came from.

use serde::Serialize;
use std::path::PathBuf;

/// Counters gathered while normalizing one list.
///
/// `tokens_seen == entries + duplicates` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    /// Raw lines handed to the normalizer, including comments and blanks.
    pub lines_read: usize,
    /// Lines dropped because their first non-whitespace character is `#`.
    pub comment_lines: usize,
    /// Lines that were empty after trimming.
    pub blank_lines: usize,
    /// Invisible or control/format characters removed from kept lines.
    pub stripped_chars: usize,
    /// Non-empty tokens found, before dedup.
    pub tokens_seen: usize,
    /// Tokens dropped because an equal token was already kept.
    pub duplicates: usize,
    /// Entries in the normalized output.
    pub entries: usize,
}

/// Result of processing one list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The list file that was read.
    pub path: PathBuf,
    /// Normalized entries, sorted by code point.
    pub entries: Vec<String>,
    pub report: NormalizeReport,
    /// Whether the rendered entries differ from the bytes on disk.
    pub changed: bool,
}
