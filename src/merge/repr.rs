//! Legacy list rendering.
//!
//! Older downstream consumers expect `paste2` rows whose second column is a
//! Python list literal such as `['NN', 'dog']`. These helpers reproduce that
//! text exactly for the characters that can appear inside a tab field.

use std::fmt::Write;

use unicode_general_category::{get_general_category, GeneralCategory};

/// Render fields as a bracketed, comma-separated list of quoted strings.
pub fn list_literal(fields: &[&str]) -> String {
    let mut out = String::from("[");
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_quoted(&mut out, field);
    }
    out.push(']');
    out
}

/// Render a single string literal.
pub fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    push_quoted(&mut out, s);
    out
}

fn push_quoted(out: &mut String, s: &str) {
    // Single quotes unless that would force escaping and double quotes would not.
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c => push_escape(out, c),
        }
    }
    out.push(quote);
}

fn push_escape(out: &mut String, c: char) {
    let code = c as u32;
    // Writing into a String cannot fail.
    let _ = if code < 0x100 {
        write!(out, "\\x{:02x}", code)
    } else if code < 0x10000 {
        write!(out, "\\u{:04x}", code)
    } else {
        write!(out, "\\U{:08x}", code)
    };
}

/// Everything outside the Other (C*) and Separator (Z*) categories is
/// printable, plus the ASCII space.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}
