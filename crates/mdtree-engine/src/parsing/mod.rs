pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;

use blocks::{
    LineClass, MarkdownLineClassifier, build_code_block, build_line_block, parse_list_block,
};
use lines::split_lines;

use crate::{
    builder::{DocumentBuilder, TreeBuilder},
    loader::MarkdownLoader,
    tree::DocumentTree,
};

/// Parses a whole document into blocks built by `builder`.
///
/// Makes one left-to-right pass over the lines. Each step looks at the
/// current line and either consumes a fenced code block, a list block, or the
/// single line. Every step advances by at least one line, so the pass always
/// reaches the end of input.
///
/// The blocks are returned in source order and not attached to the root;
/// [`MarkdownLoader`] does the root replacement. The result is never empty.
pub fn parse_document<B: DocumentBuilder>(builder: &mut B, markdown: &str) -> Vec<B::Block> {
    let classifier = MarkdownLineClassifier;
    let lines = split_lines(markdown);
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let class = classifier.classify(lines[i]);
        let next = match class {
            LineClass::FenceOpen { .. } => {
                let (block, next) = build_code_block(builder, &lines, i);
                blocks.push(block);
                next
            }
            LineClass::ListItem { .. } => {
                let (list, next) = parse_list_block(builder, &lines, i);
                blocks.push(builder.list_block(list));
                next
            }
            LineClass::Single(line) => {
                blocks.push(build_line_block(builder, line));
                i + 1
            }
        };
        log::trace!("block {} from lines {i}..{next}", blocks.len());
        debug_assert!(next > i, "no progress at line {i}");
        i = next;
    }

    if blocks.is_empty() {
        let paragraph = builder.create_paragraph();
        blocks.push(builder.container_block(paragraph));
    }

    log::debug!("parsed {} lines into {} blocks", lines.len(), blocks.len());
    blocks
}

/// Parses markdown into an owned [`DocumentTree`].
pub fn parse_markdown(markdown: &str) -> DocumentTree {
    let mut builder = TreeBuilder::new();
    MarkdownLoader::new().load(&mut builder, Some(markdown));
    builder.into_tree()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{BlockNode, HeadingLevel, InlineSpan, ListItem, ListVariant, StyleSet, TextStyle};
    use pretty_assertions::assert_eq;

    fn item(text: &str) -> ListItem {
        ListItem {
            spans: vec![InlineSpan::plain(text)],
            checked: None,
        }
    }

    #[test]
    fn end_to_end_example() {
        let tree = parse_markdown("# Title\n\nSome **bold** text and [link](http://x.com).");
        assert_eq!(
            tree.blocks,
            vec![
                BlockNode::Heading {
                    level: HeadingLevel::new(1),
                    spans: vec![InlineSpan::plain("Title")],
                },
                BlockNode::Paragraph { spans: vec![] },
                BlockNode::Paragraph {
                    spans: vec![
                        InlineSpan::plain("Some "),
                        InlineSpan::formatted("bold", StyleSet::of(&[TextStyle::Bold])),
                        InlineSpan::plain(" text and "),
                        InlineSpan::link("http://x.com", "link"),
                        InlineSpan::plain("."),
                    ],
                },
            ]
        );
    }

    #[test]
    fn empty_document_is_one_empty_paragraph() {
        let tree = parse_markdown("");
        assert_eq!(tree.blocks, vec![BlockNode::Paragraph { spans: vec![] }]);
    }

    #[test]
    fn code_block_round_trip_shape() {
        let tree = parse_markdown("```lang\nA\nB\n```");
        assert_eq!(
            tree.blocks,
            vec![BlockNode::CodeBlock {
                language: Some("lang".into()),
                body: "A\nB".into(),
            }]
        );
    }

    #[test]
    fn code_block_body_is_not_formatted() {
        let tree = parse_markdown("```\n**not bold** [x](y)\n# not a heading\n```");
        assert_eq!(
            tree.blocks,
            vec![BlockNode::CodeBlock {
                language: None,
                body: "**not bold** [x](y)\n# not a heading".into(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_consumes_rest() {
        let tree = parse_markdown("before\n```py\nx = 1\n- not a list");
        assert_eq!(
            tree.blocks,
            vec![
                BlockNode::Paragraph {
                    spans: vec![InlineSpan::plain("before")],
                },
                BlockNode::CodeBlock {
                    language: Some("py".into()),
                    body: "x = 1\n- not a list".into(),
                },
            ]
        );
    }

    #[test]
    fn variant_switch_makes_two_lists() {
        let tree = parse_markdown("- a\n1. b");
        assert_eq!(
            tree.blocks,
            vec![
                BlockNode::List {
                    variant: ListVariant::Bullet,
                    items: vec![item("a")],
                },
                BlockNode::List {
                    variant: ListVariant::Numbered,
                    items: vec![item("b")],
                },
            ]
        );
    }

    #[test]
    fn list_then_paragraph() {
        let tree = parse_markdown("- [x] done\n- [ ] todo\nafter");
        assert_eq!(tree.len(), 2);
        assert_eq!(
            tree.blocks[1],
            BlockNode::Paragraph {
                spans: vec![InlineSpan::plain("after")],
            }
        );
    }

    #[test]
    fn quote_and_malformed_heading() {
        let tree = parse_markdown("> quoted\n######## deep");
        assert_eq!(
            tree.blocks,
            vec![
                BlockNode::Quote {
                    spans: vec![InlineSpan::plain("quoted")],
                },
                BlockNode::Heading {
                    level: HeadingLevel::new(6),
                    spans: vec![InlineSpan::plain("deep")],
                },
            ]
        );
    }

    #[test]
    fn trailing_newline_adds_empty_paragraph() {
        let tree = parse_markdown("text\n");
        assert_eq!(
            tree.blocks,
            vec![
                BlockNode::Paragraph {
                    spans: vec![InlineSpan::plain("text")],
                },
                BlockNode::Paragraph { spans: vec![] },
            ]
        );
    }

    #[test]
    fn whitespace_only_line_keeps_its_text() {
        let tree = parse_markdown("a\n   \nb");
        assert_eq!(
            tree.blocks[1],
            BlockNode::Paragraph {
                spans: vec![InlineSpan::plain("   ")],
            }
        );
    }

    #[test]
    fn blocks_are_returned_without_touching_root() {
        let mut builder = TreeBuilder::new();
        let blocks = parse_document(&mut builder, "a\nb");
        assert_eq!(blocks.len(), 2);
        assert!(builder.blocks().is_empty());
    }
}
