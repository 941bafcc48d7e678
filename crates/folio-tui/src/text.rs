//! Word wrapping by display width
//!
//! Section bodies are wrapped here rather than by the paragraph widget so
//! the content height (and therefore the top/bottom boundary) is known
//! before rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` to `width` columns, breaking words longer than a line
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();

    for raw in text.lines() {
        let indent: String = raw.chars().take_while(|c| *c == ' ').collect();
        let mut line = String::new();
        let mut line_width = 0usize;

        for word in raw.split_whitespace() {
            let word_width = word.width();
            let sep = if line.is_empty() { indent.width() } else { 1 };

            if line_width + sep + word_width > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if line.is_empty() {
                if indent.width() + word_width <= width {
                    line.push_str(&indent);
                    line_width = indent.width();
                }
            } else {
                line.push(' ');
                line_width += 1;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width + ch_width > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wraps_on_word_boundary() {
        assert_eq!(wrap("alpha beta gamma", 11), vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_blank_lines_kept() {
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_long_word_is_broken() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_indent_preserved() {
        assert_eq!(wrap("  indented item", 40), vec!["  indented item"]);
    }

    #[test]
    fn test_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(wrap("日本語", 4), vec!["日本", "語"]);
    }
}
