//! Live document counters shown under the editor

use std::fmt;

/// Counts recomputed on every text change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub lines: usize,
    pub paragraphs: usize,
    pub words: usize,
    pub characters: usize,
}

impl TextStats {
    pub fn compute(text: &str) -> Self {
        Self {
            lines: count_lines(text),
            paragraphs: count_paragraphs(text),
            words: count_words(text),
            characters: text.chars().count(),
        }
    }

    /// Label texts in display order
    pub fn labels(&self) -> [String; 4] {
        [
            format!("Lines: {}", self.lines),
            format!("Paragraphs: {}", self.paragraphs),
            format!("Words: {}", self.words),
            format!("Characters: {}", self.characters),
        ]
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels().join("  "))
    }
}

/// An empty buffer still has one line
pub fn count_lines(text: &str) -> usize {
    text.matches('\n').count() + 1
}

/// Blocks separated by a blank line
pub fn count_paragraphs(text: &str) -> usize {
    text.split("\n\n").filter(|p| !p.is_empty()).count()
}

/// Runs separated by spaces, tabs or line breaks
pub fn count_words(text: &str) -> usize {
    text.split([' ', '\n', '\r', '\t'])
        .filter(|w| !w.is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = TextStats::compute("");
        assert_eq!(
            stats,
            TextStats {
                lines: 1,
                paragraphs: 0,
                words: 0,
                characters: 0,
            }
        );
    }

    #[test]
    fn test_trailing_newline_opens_a_line() {
        assert_eq!(count_lines("one\ntwo\n"), 3);
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(count_paragraphs("a\nb\n\nc"), 2);
        assert_eq!(count_paragraphs("a\n\n\n\nb"), 2);
        // Odd newline runs leave a leading "\n" on the next block
        assert_eq!(count_paragraphs("a\n\n\nb"), 2);
        assert_eq!(count_paragraphs("\n\n"), 0);
    }

    #[test]
    fn test_words_ignore_repeated_separators() {
        assert_eq!(count_words("  hello \t world\r\n  again "), 3);
    }

    #[test]
    fn test_punctuation_is_part_of_a_word() {
        assert_eq!(count_words("well-known, isn't it?"), 3);
    }

    #[test]
    fn test_characters_count_chars_not_bytes() {
        assert_eq!(TextStats::compute("héllo").characters, 5);
    }

    #[test]
    fn test_labels() {
        let stats = TextStats::compute("one two\n\nthree");
        assert_eq!(
            stats.labels(),
            [
                "Lines: 3".to_string(),
                "Paragraphs: 2".to_string(),
                "Words: 3".to_string(),
                "Characters: 14".to_string(),
            ]
        );
    }
}
