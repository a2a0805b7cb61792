//! # Document Builder
//!
//! The node-construction capability a host editor hands to the parser.
//!
//! The parser never builds editor nodes itself. It asks a [`DocumentBuilder`]
//! for every paragraph, heading, list, text run and style, and finally for a
//! root replacement: [`DocumentBuilder::clear_root`] followed by one
//! [`DocumentBuilder::append_root`] per block. Any editor backend can
//! implement it; [`TreeBuilder`] builds the owned [`crate::DocumentTree`].
//!
//! ## Node handles
//!
//! - **`Container`**: anything holding inline children (paragraph, heading,
//!   quote, list item, code block)
//! - **`List`**: a list node collecting finished list items
//! - **`Span`**: an inline node (text run or link)
//! - **`Block`**: a finished top-level node ready for the root

pub mod tree_builder;

pub use tree_builder::TreeBuilder;

use crate::tree::{HeadingLevel, ListVariant, TextStyle};

pub trait DocumentBuilder {
    type Block;
    type Container;
    type List;
    type Span;

    fn create_paragraph(&mut self) -> Self::Container;
    fn create_heading(&mut self, level: HeadingLevel) -> Self::Container;
    fn create_quote(&mut self) -> Self::Container;
    fn create_list(&mut self, variant: ListVariant) -> Self::List;
    fn create_list_item(&mut self) -> Self::Container;
    /// Marks a list item as a checked or unchecked checkbox.
    fn set_checked(&mut self, item: &mut Self::Container, checked: bool);
    /// Creates a code block. Its body arrives as a single text span.
    fn create_code_block(&mut self, language: Option<&str>) -> Self::Container;

    fn create_text(&mut self, text: &str) -> Self::Span;
    /// Wraps `text` as the single child of a link to `url`.
    fn create_link(&mut self, url: &str, text: Self::Span) -> Self::Span;
    fn apply_text_style(&mut self, span: &mut Self::Span, style: TextStyle);

    fn append_inline(&mut self, container: &mut Self::Container, span: Self::Span);
    fn append_item(&mut self, list: &mut Self::List, item: Self::Container);

    fn container_block(&mut self, container: Self::Container) -> Self::Block;
    fn list_block(&mut self, list: Self::List) -> Self::Block;

    /// Removes all existing root content.
    fn clear_root(&mut self);
    fn append_root(&mut self, block: Self::Block);
}
