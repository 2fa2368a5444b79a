//! Domain-specific assertion macros for banlist harnesses.
//!
//! These add context-rich failure messages that say which list invariant was
//! violated and at which position.

/// Assert that a list is sorted by code point with no repeats.
///
/// ```rust
/// assert_normalized!(entries);
/// ```
#[macro_export]
macro_rules! assert_normalized {
    ($entries:expr) => {{
        let entries: &[String] = &$entries;
        for (i, pair) in entries.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                panic!(
                    "assert_normalized! failed at index {}:\n  {:?}\n  {:?}\n  full list: {:?}",
                    i, pair[0], pair[1], entries
                );
            }
        }
    }};
}

/// Assert that no entry contains whitespace or a character the normalizer strips.
#[macro_export]
macro_rules! assert_clean_entries {
    ($entries:expr) => {{
        let entries: &[String] = &$entries;
        for entry in entries {
            if entry.is_empty() {
                panic!("assert_clean_entries! failed: empty entry in {:?}", entries);
            }
            if let Some(ch) = entry
                .chars()
                .find(|&c| c.is_whitespace() || banlist_core::normalizer::is_stripped(c))
            {
                panic!(
                    "assert_clean_entries! failed: {:?} contains U+{:04X}",
                    entry, ch as u32
                );
            }
        }
    }};
}
