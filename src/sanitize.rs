//! Sanitizer: reduce raw text to the cipher's 29-symbol alphabet.
//!
//! Uppercases ASCII letters, maps spaces to `_`, keeps `.` `,` `_`,
//! and drops everything else.

use crate::alphabet::EXTRA_SYMBOLS;

/// Map arbitrary input into text containing only base-alphabet symbols.
///
/// ASCII letters are uppercased, the ASCII space becomes `_`, the
/// punctuation extras pass through, and every other character (including
/// other whitespace) is dropped. Total over any input; empty in, empty out.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| {
            let c = c.to_ascii_uppercase();
            if c == ' ' {
                Some('_')
            } else if c.is_ascii_uppercase() || EXTRA_SYMBOLS.contains(c) {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}
