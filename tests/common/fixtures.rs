//! Static list corpora and file helpers used across harnesses.

use std::path::{Path, PathBuf};

/// A clean excerpt of the SDL banned-function list, already normalized.
pub const CORPUS_CLEAN: &[&str] = &[
    "_mbscat", "_mbscpy", "gets", "lstrcat", "lstrcpy", "sprintf", "strcat", "strcpy",
    "strncpy", "vsprintf", "wcscat", "wcscpy",
];

/// The same functions as a hand-maintained list: comments, blank lines,
/// several names per line, repeats.
pub const CORPUS_MESSY: &[&str] = &[
    "# SDL banned functions",
    "#   string copy",
    "strcpy wcscpy _mbscpy lstrcpy",
    "strncpy",
    "",
    "#   concatenation",
    "strcat wcscat _mbscat lstrcat",
    "   ",
    "sprintf vsprintf",
    "gets",
    "strcpy   strcat",
];

/// Lines whose names carry invisible or control characters.
pub const CORPUS_OBFUSCATED: &[&str] = &[
    "str\u{200B}cpy",
    "\u{FEFF}strcat",
    "sprin\u{00AD}tf",
    "ge\u{2060}ts",
    "wcs\u{200C}cpy wcs\u{200D}cat",
    "_mbs\u{034F}cpy",
    "lstr\u{0007}cat\u{202E}",
];

/// Expected output for [`CORPUS_OBFUSCATED`].
pub const CORPUS_OBFUSCATED_CLEAN: &[&str] = &[
    "_mbscpy", "gets", "lstrcat", "sprintf", "strcat", "strcpy", "wcscat", "wcscpy",
];

/// Write `lines` joined with `\n` (plus a trailing newline) to `name` inside `dir`.
pub fn write_list(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(&path, contents).expect("write fixture list");
    path
}

/// Large synthetic list: `n` lines of two names each, every name appearing
/// on exactly two lines.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("fn_{i:05} fn_{:05}", (i + 1) % n))
        .collect()
}

/// Mark `path` read-only. Returns `false` when writes still succeed, as they
/// do for privileged users.
pub fn make_read_only(path: &Path) -> bool {
    let mut perms = std::fs::metadata(path).expect("stat fixture").permissions();
    perms.set_readonly(true);
    std::fs::set_permissions(path, perms).expect("chmod fixture");
    std::fs::OpenOptions::new().write(true).open(path).is_err()
}
