//! Tab-delimited field helpers.
//!
//! Fields are opaque strings. Nothing here validates field counts: a line
//! without a delimiter is a single field, an empty line is one empty field.

use super::FIELD_DELIMITER;

/// Whitespace as `str.strip()` sees it: Unicode whitespace plus the
/// ASCII information separators FS, GS, RS and US.
pub fn is_strip_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Remove leading and trailing whitespace.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_strip_whitespace)
}

/// Remove trailing whitespace only.
pub fn trim_line_end(line: &str) -> &str {
    line.trim_end_matches(is_strip_whitespace)
}

pub fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(FIELD_DELIMITER)
}

/// The text before the first delimiter, or the whole line.
pub fn first_field(line: &str) -> &str {
    match line.find(FIELD_DELIMITER) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// The text after the last delimiter, or the whole line.
pub fn last_field(line: &str) -> &str {
    match line.rfind(FIELD_DELIMITER) {
        Some(idx) => &line[idx + FIELD_DELIMITER.len_utf8()..],
        None => line,
    }
}

/// Every field except the first. Empty when the line has no delimiter.
pub fn tail_fields(line: &str) -> Vec<&str> {
    split_fields(line).skip(1).collect()
}
