//! # Inline Parsing
//!
//! Cursor-based inline parsing for paragraph, heading, quote and list item
//! text. Code block bodies never come through here.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Styled, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (Link, Emphasis)
//! - **`cursor`**: `Cursor` for forward scanning with delimiter search
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Precedence
//!
//! Links are found first and their text is opaque. Emphasis is then decided
//! per remaining segment, bold+italic before bold before italic before
//! strikethrough before code.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;

use crate::builder::DocumentBuilder;

/// Parses `text` and appends the resulting spans to `container` in order.
pub fn format_inline<B: DocumentBuilder>(builder: &mut B, text: &str, container: &mut B::Container) {
    for node in parse_inline(text) {
        let span = match node {
            InlineNode::Text(text) => builder.create_text(text),
            InlineNode::Styled { text, styles } => {
                let mut span = builder.create_text(text);
                for style in styles.iter() {
                    builder.apply_text_style(&mut span, style);
                }
                span
            }
            InlineNode::Link { text, url } => {
                let child = builder.create_text(text);
                builder.create_link(url, child)
            }
        };
        builder.append_inline(container, span);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::TreeBuilder,
        tree::{BlockNode, InlineSpan, StyleSet, TextStyle},
    };
    use pretty_assertions::assert_eq;

    fn paragraph_spans(text: &str) -> Vec<InlineSpan> {
        let mut b = TreeBuilder::new();
        let mut p = b.create_paragraph();
        format_inline(&mut b, text, &mut p);
        match b.container_block(p) {
            BlockNode::Paragraph { spans } => spans,
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn spans_follow_source_order() {
        assert_eq!(
            paragraph_spans("Some **bold** text and [link](http://x.com)."),
            vec![
                InlineSpan::plain("Some "),
                InlineSpan::formatted("bold", StyleSet::of(&[TextStyle::Bold])),
                InlineSpan::plain(" text and "),
                InlineSpan::link("http://x.com", "link"),
                InlineSpan::plain("."),
            ]
        );
    }

    #[test]
    fn bold_italic_gets_both_styles() {
        assert_eq!(
            paragraph_spans("***both***"),
            vec![InlineSpan::formatted(
                "both",
                StyleSet::of(&[TextStyle::Bold, TextStyle::Italic])
            )]
        );
    }

    #[test]
    fn empty_text_appends_nothing() {
        assert!(paragraph_spans("").is_empty());
    }
}
