//! Normalizer — turns raw list lines into a sorted, deduplicated set of tokens.
//!
//! Each line is trimmed, dropped if blank or a `#` comment, stripped of
//! invisible and control/format characters, then split on whitespace.
//! Repeated tokens keep their first occurrence; the result is sorted by code
//! point.

use crate::types::NormalizeReport;
use std::borrow::Cow;
use std::collections::HashSet;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// First non-whitespace character of a comment line.
pub const COMMENT_MARKER: char = '#';

/// Zero-width and invisible code points removed regardless of category.
///
/// All but U+034F are also `Cf`; the combining grapheme joiner is `Mn` and
/// only goes through this table.
pub const INVISIBLE_CHARS: [char; 7] = [
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{FEFF}', // zero width no-break space / BOM
    '\u{2060}', // word joiner
    '\u{00AD}', // soft hyphen
    '\u{034F}', // combining grapheme joiner
];

/// True for characters trimmed from both ends of a line: Unicode whitespace
/// plus the information separators U+001C..=U+001F.
#[inline]
pub fn is_trimmed(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&ch)
}

/// True for characters the normalizer removes from a kept line: the
/// invisible set plus every `C*` general category (Cc, Cf, Cs, Co, Cn).
#[inline]
pub fn is_stripped(ch: char) -> bool {
    INVISIBLE_CHARS.contains(&ch) || ch.general_category_group() == GeneralCategoryGroup::Other
}

/// Remove stripped characters from `line`. Borrows when there is nothing to remove.
pub fn clean_line(line: &str) -> Cow<'_, str> {
    if !line.chars().any(is_stripped) {
        return Cow::Borrowed(line);
    }
    Cow::Owned(line.chars().filter(|&ch| !is_stripped(ch)).collect())
}

/// Normalize raw list lines into sorted, unique tokens.
///
/// Total: never fails and never panics for any input.
///
/// ```
/// let out = banlist_core::normalize(["# header", "", "foo bar", "bar baz", "foo"]);
/// assert_eq!(out, ["bar", "baz", "foo"]);
/// ```
pub fn normalize<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    normalize_with_report(lines).0
}

/// Same output as [`normalize`], plus the counters of the run.
pub fn normalize_with_report<I, S>(lines: I) -> (Vec<String>, NormalizeReport)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = NormalizeReport::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries: Vec<String> = Vec::new();

    for line in lines {
        report.lines_read += 1;

        let line = line.as_ref().trim_matches(is_trimmed);
        if line.is_empty() {
            report.blank_lines += 1;
            continue;
        }
        if line.starts_with(COMMENT_MARKER) {
            report.comment_lines += 1;
            continue;
        }

        let cleaned = clean_line(line);
        if let Cow::Owned(ref owned) = cleaned {
            report.stripped_chars += line.chars().count() - owned.chars().count();
        }

        for token in cleaned.split_whitespace() {
            report.tokens_seen += 1;
            if seen.contains(token) {
                report.duplicates += 1;
                continue;
            }
            seen.insert(token.to_owned());
            entries.push(token.to_owned());
        }
    }

    // `String` orders by UTF-8 bytes, which is code-point order.
    entries.sort_unstable();
    report.entries = entries.len();
    (entries, report)
}

/// Render entries in list-file format: one per line, each followed by `\n`.
pub fn render<S: AsRef<str>>(entries: &[S]) -> String {
    let mut out = String::with_capacity(entries.iter().map(|e| e.as_ref().len() + 1).sum());
    for entry in entries {
        out.push_str(entry.as_ref());
        out.push('\n');
    }
    out
}

/// True when `entries` is strictly increasing, i.e. sorted with no repeats.
pub fn is_normalized<S: AsRef<str>>(entries: &[S]) -> bool {
    entries.windows(2).all(|w| w[0].as_ref() < w[1].as_ref())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
