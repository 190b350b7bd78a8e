//! Summary-row text truncation

use std::borrow::Cow;

/// Longest representative error shown in a summary row
pub const SUMMARY_MAX_CHARS: usize = 65;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Truncate a representative error for the summary row.
///
/// Text of at most [`SUMMARY_MAX_CHARS`] characters is returned unchanged;
/// longer text is cut to exactly that many characters followed by [`ELLIPSIS`].
pub fn truncate(s: &str) -> Cow<'_, str> {
    truncate_to(s, SUMMARY_MAX_CHARS)
}

/// Truncate to `max_chars` Unicode scalar values, never splitting a character.
pub fn truncate_to(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        None => Cow::Borrowed(s),
        Some((cut, _)) => Cow::Owned(format!("{}{}", &s[..cut], ELLIPSIS)),
    }
}
