//! Word lookup on single lines of document text.
//!
//! Columns are character indices, matching the positions hosts hand to
//! command handlers.

/// Check if a character belongs to an identifier-like word.
///
/// Uses Unicode Standard Annex #31 `XID_Continue`, which covers `_`,
/// digits and non-ASCII letters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Find the boundaries of the word covering `index`.
///
/// Returns `Some((start, end))` with `end` exclusive, or `None` when the
/// character at `index` is not a word character or is out of bounds.
///
/// # Example
/// ```
/// use highlight_errors::core::text_utils::find_word_boundaries;
///
/// let line: Vec<char> = "import { useState } from 'react';".chars().collect();
/// assert_eq!(find_word_boundaries(&line, 11), Some((9, 17)));
/// assert_eq!(find_word_boundaries(&line, 7), None);
/// ```
pub fn find_word_boundaries(chars: &[char], index: usize) -> Option<(usize, usize)> {
    if !chars.get(index).copied().is_some_and(is_word_character) {
        return None;
    }

    let start = chars[..index]
        .iter()
        .rposition(|c| !is_word_character(*c))
        .map_or(0, |i| i + 1);
    let end = chars[index..]
        .iter()
        .position(|c| !is_word_character(*c))
        .map_or(chars.len(), |i| index + i);

    Some((start, end))
}
