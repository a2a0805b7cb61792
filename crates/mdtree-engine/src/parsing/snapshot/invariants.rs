use crate::tree::{BlockNode, DocumentTree, HeadingLevel, InlineSpan, ListVariant};

/// Validates parser output invariants.
///
/// Asserts that:
/// - The tree has at least one block
/// - Heading levels are within `1..=6`
/// - List items carry `checked` exactly when the list is a checkbox list
/// - Lists are never empty
/// - No inline span has empty text, and no link has an empty url
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(tree: &DocumentTree) {
    assert!(!tree.is_empty(), "document tree has no blocks");

    for (i, block) in tree.iter().enumerate() {
        match block {
            BlockNode::Heading { level, spans } => {
                assert!(
                    (HeadingLevel::MIN..=HeadingLevel::MAX).contains(&level.get()),
                    "block {i}: heading level {} out of range",
                    level.get()
                );
                check_spans(i, spans);
            }
            BlockNode::Paragraph { spans } | BlockNode::Quote { spans } => check_spans(i, spans),
            BlockNode::List { variant, items } => {
                assert!(!items.is_empty(), "block {i}: empty {variant:?} list");
                for item in items {
                    assert_eq!(
                        item.checked.is_some(),
                        *variant == ListVariant::Checkbox,
                        "block {i}: checked state {:?} on a {variant:?} list",
                        item.checked
                    );
                    check_spans(i, &item.spans);
                }
            }
            BlockNode::CodeBlock { .. } => {}
        }
    }
}

fn check_spans(block: usize, spans: &[InlineSpan]) {
    for span in spans {
        assert!(
            !span.text().is_empty(),
            "block {block}: empty inline span {span:?}"
        );
        if let InlineSpan::Link { url, .. } = span {
            assert!(!url.is_empty(), "block {block}: link without url");
        }
    }
}
