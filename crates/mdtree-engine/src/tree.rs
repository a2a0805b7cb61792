//! Owned document tree produced by [`crate::TreeBuilder`].
//!
//! These types are the reference shape of a loaded document. Editor backends
//! that implement [`crate::DocumentBuilder`] build their own node types and
//! never need to touch these.

use serde::{Serialize, Serializer};

/// A text style that can be applied to an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Bold,
    Italic,
    Strikethrough,
    Code,
}

impl TextStyle {
    pub const ALL: [TextStyle; 4] = [
        TextStyle::Bold,
        TextStyle::Italic,
        TextStyle::Strikethrough,
        TextStyle::Code,
    ];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of [`TextStyle`]s, stored as a bit set.
///
/// Serializes as a list of style names in [`TextStyle::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleSet(u8);

impl StyleSet {
    pub const EMPTY: StyleSet = StyleSet(0);

    /// Builds a set from a slice of styles. Usable in constants.
    pub const fn of(styles: &[TextStyle]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < styles.len() {
            bits |= styles[i].bit();
            i += 1;
        }
        StyleSet(bits)
    }

    #[must_use]
    pub fn with(self, style: TextStyle) -> Self {
        StyleSet(self.0 | style.bit())
    }

    pub fn insert(&mut self, style: TextStyle) {
        self.0 |= style.bit();
    }

    pub fn contains(self, style: TextStyle) -> bool {
        self.0 & style.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the contained styles in [`TextStyle::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = TextStyle> {
        TextStyle::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl FromIterator<TextStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = TextStyle>>(iter: I) -> Self {
        iter.into_iter().fold(StyleSet::EMPTY, StyleSet::with)
    }
}

impl Serialize for StyleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Heading level, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Creates a level from a marker count, clamping into `1..=6`.
    pub fn new(count: usize) -> Self {
        HeadingLevel(count.clamp(Self::MIN as usize, Self::MAX as usize) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// The kind of a list, fixed by the first line of the list block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListVariant {
    Bullet,
    Numbered,
    Checkbox,
}

/// Smallest styled unit of text inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineSpan {
    PlainText { text: String },
    FormattedText { text: String, styles: StyleSet },
    /// A link with its single child text.
    Link { url: String, text: String },
}

impl InlineSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        InlineSpan::PlainText { text: text.into() }
    }

    pub fn formatted(text: impl Into<String>, styles: StyleSet) -> Self {
        InlineSpan::FormattedText {
            text: text.into(),
            styles,
        }
    }

    pub fn link(url: impl Into<String>, text: impl Into<String>) -> Self {
        InlineSpan::Link {
            url: url.into(),
            text: text.into(),
        }
    }

    /// The visible text of the span.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::PlainText { text }
            | InlineSpan::FormattedText { text, .. }
            | InlineSpan::Link { text, .. } => text,
        }
    }
}

/// One entry of a list block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub spans: Vec<InlineSpan>,
    /// Only set for items of a [`ListVariant::Checkbox`] list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// Top-level structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockNode {
    Paragraph {
        spans: Vec<InlineSpan>,
    },
    Heading {
        level: HeadingLevel,
        spans: Vec<InlineSpan>,
    },
    Quote {
        spans: Vec<InlineSpan>,
    },
    List {
        variant: ListVariant,
        items: Vec<ListItem>,
    },
    CodeBlock {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        /// Raw body, never inline-formatted.
        body: String,
    },
}

impl BlockNode {
    /// Inline spans of a paragraph, heading or quote. Empty for lists and code.
    pub fn spans(&self) -> &[InlineSpan] {
        match self {
            BlockNode::Paragraph { spans }
            | BlockNode::Heading { spans, .. }
            | BlockNode::Quote { spans } => spans,
            BlockNode::List { .. } | BlockNode::CodeBlock { .. } => &[],
        }
    }
}

/// Root container: the ordered blocks of one loaded document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentTree {
    pub blocks: Vec<BlockNode>,
}

impl DocumentTree {
    pub fn new(blocks: Vec<BlockNode>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BlockNode> {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_clamps() {
        assert_eq!(HeadingLevel::new(0).get(), 1);
        assert_eq!(HeadingLevel::new(3).get(), 3);
        assert_eq!(HeadingLevel::new(9).get(), 6);
    }

    #[test]
    fn style_set_membership() {
        let set = StyleSet::of(&[TextStyle::Bold, TextStyle::Italic]);
        assert!(set.contains(TextStyle::Bold));
        assert!(set.contains(TextStyle::Italic));
        assert!(!set.contains(TextStyle::Code));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![TextStyle::Bold, TextStyle::Italic]
        );
    }

    #[test]
    fn style_set_from_iter_matches_const_builder() {
        let collected: StyleSet = [TextStyle::Strikethrough, TextStyle::Code]
            .into_iter()
            .collect();
        assert_eq!(
            collected,
            StyleSet::of(&[TextStyle::Code, TextStyle::Strikethrough])
        );
        assert!(StyleSet::EMPTY.is_empty());
    }

    #[test]
    fn spans_of_non_inline_blocks_are_empty() {
        let code = BlockNode::CodeBlock {
            language: None,
            body: "x".into(),
        };
        assert!(code.spans().is_empty());
    }
}
