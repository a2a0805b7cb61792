use crate::tree::{HeadingLevel, ListVariant};

use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker};

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Opens a fenced code block.
    FenceOpen { language: Option<&'a str> },
    /// Starts (or continues) a list of the given variant.
    ListItem { variant: ListVariant },
    /// A line that is a whole block by itself.
    Single(SingleLine<'a>),
}

/// A line that becomes exactly one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleLine<'a> {
    /// The empty line. Whitespace-only lines are paragraphs.
    Blank,
    Heading { level: HeadingLevel, text: &'a str },
    Quote { text: &'a str },
    /// Anything else; the whole line is the text.
    Paragraph { text: &'a str },
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line in precedence order: fence, list item, blank,
    /// heading, quote, paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if CodeFence::is_fence(line) {
            return LineClass::FenceOpen {
                language: CodeFence::language(line),
            };
        }
        if let Some(variant) = ListMarker::detect(line) {
            return LineClass::ListItem { variant };
        }
        LineClass::Single(Self::single(line))
    }

    fn single(line: &str) -> SingleLine<'_> {
        if line.is_empty() {
            return SingleLine::Blank;
        }
        if let Some((level, text)) = Heading::strip_prefix(line) {
            return SingleLine::Heading { level, text };
        }
        if let Some(text) = BlockQuote::strip_prefix(line) {
            return SingleLine::Quote { text };
        }
        SingleLine::Paragraph { text: line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(line: &str) -> LineClass<'_> {
        MarkdownLineClassifier.classify(line)
    }

    #[test]
    fn fence_with_language() {
        assert_eq!(
            classify("```rust"),
            LineClass::FenceOpen {
                language: Some("rust")
            }
        );
    }

    #[test]
    fn list_lines() {
        assert_eq!(
            classify("- [x] done"),
            LineClass::ListItem {
                variant: ListVariant::Checkbox
            }
        );
        assert_eq!(
            classify("7. seventh"),
            LineClass::ListItem {
                variant: ListVariant::Numbered
            }
        );
    }

    #[test]
    fn only_the_empty_line_is_blank() {
        assert_eq!(classify(""), LineClass::Single(SingleLine::Blank));
    }

    #[rstest]
    #[case("   ")]
    #[case("\t")]
    #[case(" \t ")]
    fn whitespace_only_lines_are_paragraphs(#[case] line: &str) {
        assert_eq!(
            classify(line),
            LineClass::Single(SingleLine::Paragraph { text: line })
        );
    }

    #[test]
    fn heading_line() {
        assert_eq!(
            classify("## Section"),
            LineClass::Single(SingleLine::Heading {
                level: HeadingLevel::new(2),
                text: "Section"
            })
        );
    }

    #[test]
    fn quote_line() {
        assert_eq!(
            classify("> wise words"),
            LineClass::Single(SingleLine::Quote {
                text: "wise words"
            })
        );
    }

    #[rstest]
    #[case("just text")]
    #[case("#hashtag")]
    #[case(">no space")]
    #[case("-not a list")]
    #[case("  indented text")]
    fn falls_back_to_paragraph(#[case] line: &str) {
        assert_eq!(
            classify(line),
            LineClass::Single(SingleLine::Paragraph { text: line })
        );
    }
}
