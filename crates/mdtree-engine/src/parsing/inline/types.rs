use crate::tree::StyleSet;

/// A parsed inline node borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode<'a> {
    /// Plain text that isn't part of any special construct.
    Text(&'a str),
    /// A run with its delimiters stripped.
    Styled { text: &'a str, styles: StyleSet },
    /// `[text](url)`. The text is never formatted further.
    Link { text: &'a str, url: &'a str },
}
