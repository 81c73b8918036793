//! Row rules: how one line pair becomes one output row.

use super::fields::{first_field, last_field, tail_fields, trim_line, trim_line_end};
use super::repr::list_literal;
use super::FIELD_DELIMITER;

/// Turns a line pair into an output row (without its line terminator).
pub trait RowFormat {
    fn format_row(&self, line_a: &str, line_b: &str) -> String;
}

/// `paste`: the trimmed line A followed by the last field of line B.
#[derive(Debug, Default, Clone, Copy)]
pub struct LemmaRow;

impl RowFormat for LemmaRow {
    fn format_row(&self, line_a: &str, line_b: &str) -> String {
        let word = trim_line(line_a);
        if word.is_empty() {
            return String::new();
        }
        let lemma = last_field(trim_line_end(line_b));
        let mut row = String::with_capacity(word.len() + lemma.len() + 1);
        row.push_str(word);
        row.push(FIELD_DELIMITER);
        row.push_str(lemma);
        row
    }
}

/// How `paste2` renders the fields it takes from line B.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TagListStyle {
    /// Fields joined with tabs.
    #[default]
    Joined,
    /// A Python list literal, e.g. `['NN', 'dog']`.
    Legacy,
}

/// `paste2`: the first field of line A followed by all but the first field
/// of line B.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagRow {
    pub style: TagListStyle,
}

impl TagRow {
    pub fn new(style: TagListStyle) -> Self {
        Self { style }
    }
}

impl RowFormat for TagRow {
    fn format_row(&self, line_a: &str, line_b: &str) -> String {
        let trimmed = trim_line(line_a);
        if trimmed.is_empty() {
            return String::new();
        }
        let word = first_field(trimmed);
        let tags = tail_fields(trim_line(line_b));
        let rendered = match self.style {
            TagListStyle::Joined => tags.join("\t"),
            TagListStyle::Legacy => list_literal(&tags),
        };
        format!("{}{}{}", word, FIELD_DELIMITER, rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", "a\tb\tNOUN", "hello\tNOUN")]
    #[case("  hello  \n", "a\tb\tNOUN\n", "hello\tNOUN")]
    #[case("word", "lemma", "word\tlemma")]
    #[case("word", "w\tNN\tlemma\t\t", "word\tlemma")]
    #[case("word", "", "word\t")]
    #[case("two words", "x\ty z", "two words\ty z")]
    #[case("", "x\ty", "")]
    #[case(" \t ", "x\ty", "")]
    fn test_lemma_row(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        assert_eq!(LemmaRow.format_row(a, b), expected);
    }

    #[rstest]
    #[case("dog\tNN", "dog\tNN\tdog", "dog\tNN\tdog")]
    #[case("dog", "dog\tNN\tdog\n", "dog\tNN\tdog")]
    #[case("dog\tignored", "x", "dog\t")]
    #[case("dog", "", "dog\t")]
    #[case("  dog\tNN  ", "\tNN\t\tdog ", "dog\t\tdog")]
    #[case("", "dog\tNN", "")]
    fn test_tag_row_joined(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        assert_eq!(TagRow::new(TagListStyle::Joined).format_row(a, b), expected);
    }

    #[rstest]
    #[case("dog\tNN", "dog\tNN\tdog", "dog\t['NN', 'dog']")]
    #[case("dog", "dog", "dog\t[]")]
    #[case("it", "it\tPRP\tit's", "it\t['PRP', \"it's\"]")]
    #[case("\n", "dog\tNN", "")]
    fn test_tag_row_legacy(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        assert_eq!(TagRow::new(TagListStyle::Legacy).format_row(a, b), expected);
    }

    #[test]
    fn test_tag_row_default_is_joined() {
        assert_eq!(TagRow::default().style, TagListStyle::Joined);
    }
}
