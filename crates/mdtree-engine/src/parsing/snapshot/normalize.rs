use std::fmt::Write;

use crate::tree::{BlockNode, DocumentTree, InlineSpan, StyleSet, TextStyle};

/// Renders a tree as an indented outline for snapshot testing.
///
/// One line per block, with its spans (or list items, or code lines) indented
/// underneath. Text is `Debug`-quoted so whitespace is visible.
///
/// ```text
/// Heading(1)
///   Text "Title"
/// List(Checkbox)
///   Item [x]
///     Text "done"
/// CodeBlock("sh")
///   | echo hi
/// ```
pub fn normalize(tree: &DocumentTree) -> String {
    let mut out = String::new();
    for block in tree.iter() {
        match block {
            BlockNode::Paragraph { spans } => {
                out.push_str("Paragraph\n");
                write_spans(&mut out, spans, 1);
            }
            BlockNode::Heading { level, spans } => {
                let _ = writeln!(out, "Heading({})", level.get());
                write_spans(&mut out, spans, 1);
            }
            BlockNode::Quote { spans } => {
                out.push_str("Quote\n");
                write_spans(&mut out, spans, 1);
            }
            BlockNode::List { variant, items } => {
                let _ = writeln!(out, "List({variant:?})");
                for item in items {
                    match item.checked {
                        Some(true) => out.push_str("  Item [x]\n"),
                        Some(false) => out.push_str("  Item [ ]\n"),
                        None => out.push_str("  Item\n"),
                    }
                    write_spans(&mut out, &item.spans, 2);
                }
            }
            BlockNode::CodeBlock { language, body } => {
                match language {
                    Some(language) => {
                        let _ = writeln!(out, "CodeBlock({language:?})");
                    }
                    None => out.push_str("CodeBlock\n"),
                }
                if !body.is_empty() {
                    for line in body.split('\n') {
                        if line.is_empty() {
                            out.push_str("  |\n");
                        } else {
                            let _ = writeln!(out, "  | {line}");
                        }
                    }
                }
            }
        }
    }
    out
}

fn write_spans(out: &mut String, spans: &[InlineSpan], depth: usize) {
    let indent = "  ".repeat(depth);
    for span in spans {
        let _ = match span {
            InlineSpan::PlainText { text } => writeln!(out, "{indent}Text {text:?}"),
            InlineSpan::FormattedText { text, styles } => {
                writeln!(out, "{indent}Styled[{}] {text:?}", style_names(*styles))
            }
            InlineSpan::Link { url, text } => writeln!(out, "{indent}Link({url:?}) {text:?}"),
        };
    }
}

fn style_names(styles: StyleSet) -> String {
    styles
        .iter()
        .map(|style| match style {
            TextStyle::Bold => "bold",
            TextStyle::Italic => "italic",
            TextStyle::Strikethrough => "strike",
            TextStyle::Code => "code",
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{HeadingLevel, ListItem, ListVariant};
    use pretty_assertions::assert_eq;

    #[test]
    fn outline_of_mixed_tree() {
        let tree = DocumentTree::new(vec![
            BlockNode::Heading {
                level: HeadingLevel::new(2),
                spans: vec![InlineSpan::plain("Hi")],
            },
            BlockNode::List {
                variant: ListVariant::Checkbox,
                items: vec![ListItem {
                    spans: vec![InlineSpan::formatted(
                        "done",
                        StyleSet::of(&[TextStyle::Bold, TextStyle::Italic]),
                    )],
                    checked: Some(true),
                }],
            },
            BlockNode::CodeBlock {
                language: None,
                body: "a\n\nb".into(),
            },
        ]);

        assert_eq!(
            normalize(&tree),
            "Heading(2)\n  Text \"Hi\"\nList(Checkbox)\n  Item [x]\n    Styled[bold+italic] \"done\"\nCodeBlock\n  | a\n  |\n  | b\n"
        );
    }
}
