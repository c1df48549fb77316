//! Width-aware word wrapping
//!
//! Section content is wrapped up front so the stack knows each block's
//! height before anything is drawn.

use ratatui::style::Style;
use ratatui::text::Line;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns
pub fn display_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Greedy word wrap to `width` columns.
///
/// Explicit newlines start a new line; words wider than `width` are split
/// at the column limit. Always returns at least one line.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if line_width > 0 && line_width + 1 + word_width > width {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width > width {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if line_width > 0 && line_width + ch_width > width {
                        out.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(ch);
                    line_width += ch_width;
                }
                continue;
            }

            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        out.push(line);
    }

    out
}

/// Wrap `text` into styled lines
pub fn wrapped_lines(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|l| Line::styled(l, style))
        .collect()
}

/// Wrap `text` into centered styled lines
pub fn centered_lines(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrapped_lines(text, width, style)
        .into_iter()
        .map(Line::centered)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        assert_eq!(
            wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_exact_fit_does_not_wrap() {
        assert_eq!(wrap("abcde fghij", 11), vec!["abcde fghij"]);
    }

    #[test]
    fn test_long_word_is_split() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_newlines_are_kept() {
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_empty_text_yields_one_empty_line() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_zero_width_is_treated_as_one() {
        assert_eq!(wrap("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_display_width_counts_columns() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("→"), 1);
    }
}
