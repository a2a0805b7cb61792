use crate::{builder::DocumentBuilder, parsing::inline::format_inline};

use super::{classify::SingleLine, kinds::CodeFence};

/// Builds the block for a single-line class (blank, heading, quote, paragraph).
pub fn build_line_block<B: DocumentBuilder>(builder: &mut B, line: SingleLine<'_>) -> B::Block {
    let (mut container, text) = match line {
        SingleLine::Blank => {
            let paragraph = builder.create_paragraph();
            return builder.container_block(paragraph);
        }
        SingleLine::Heading { level, text } => (builder.create_heading(level), text),
        SingleLine::Quote { text } => (builder.create_quote(), text),
        SingleLine::Paragraph { text } => (builder.create_paragraph(), text),
    };
    format_inline(builder, text, &mut container);
    builder.container_block(container)
}

/// Consumes a fenced code block starting at `start`.
///
/// Lines after the opening fence are captured verbatim up to a closing fence
/// or end of input. Returns the block and the index of the first line after
/// the closing fence (or `lines.len()` when unterminated).
pub fn build_code_block<B: DocumentBuilder>(
    builder: &mut B,
    lines: &[&str],
    start: usize,
) -> (B::Block, usize) {
    let language = lines.get(start).and_then(|line| CodeFence::language(line));
    let body_start = (start + 1).min(lines.len());
    let body_end = lines[body_start..]
        .iter()
        .position(|line| CodeFence::is_fence(line))
        .map_or(lines.len(), |offset| body_start + offset);

    let mut block = builder.create_code_block(language);
    let body = lines[body_start..body_end].join("\n");
    if !body.is_empty() {
        let text = builder.create_text(&body);
        builder.append_inline(&mut block, text);
    }

    // Skip the closing fence when there is one.
    let next = (body_end + 1).min(lines.len()).max(start + 1);
    (builder.container_block(block), next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::TreeBuilder,
        tree::{BlockNode, HeadingLevel, InlineSpan},
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_line_is_empty_paragraph() {
        let mut b = TreeBuilder::new();
        let block = build_line_block(&mut b, SingleLine::Blank);
        assert_eq!(block, BlockNode::Paragraph { spans: vec![] });
    }

    #[test]
    fn heading_content_goes_through_inline_formatter() {
        let mut b = TreeBuilder::new();
        let block = build_line_block(
            &mut b,
            SingleLine::Heading {
                level: HeadingLevel::new(2),
                text: "Plain",
            },
        );
        assert_eq!(
            block,
            BlockNode::Heading {
                level: HeadingLevel::new(2),
                spans: vec![InlineSpan::plain("Plain")],
            }
        );
    }

    #[test]
    fn whitespace_paragraph_keeps_its_text() {
        let mut b = TreeBuilder::new();
        let block = build_line_block(&mut b, SingleLine::Paragraph { text: "  \t" });
        assert_eq!(
            block,
            BlockNode::Paragraph {
                spans: vec![InlineSpan::plain("  \t")],
            }
        );
    }

    #[test]
    fn closed_fence_skips_closing_line() {
        let mut b = TreeBuilder::new();
        let lines = ["```sh", "echo *hi*", "```", "after"];
        let (block, next) = build_code_block(&mut b, &lines, 0);
        assert_eq!(
            block,
            BlockNode::CodeBlock {
                language: Some("sh".into()),
                body: "echo *hi*".into(),
            }
        );
        assert_eq!(next, 3);
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let mut b = TreeBuilder::new();
        let lines = ["intro", "```", "a", "b"];
        let (block, next) = build_code_block(&mut b, &lines, 1);
        assert_eq!(
            block,
            BlockNode::CodeBlock {
                language: None,
                body: "a\nb".into(),
            }
        );
        assert_eq!(next, 4);
    }

    #[test]
    fn fence_on_last_line_still_advances() {
        let mut b = TreeBuilder::new();
        let lines = ["```"];
        let (block, next) = build_code_block(&mut b, &lines, 0);
        assert_eq!(
            block,
            BlockNode::CodeBlock {
                language: None,
                body: String::new(),
            }
        );
        assert_eq!(next, 1);
    }
}
