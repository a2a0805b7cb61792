use crate::tree::{
    BlockNode, DocumentTree, HeadingLevel, InlineSpan, ListItem, ListVariant, StyleSet, TextStyle,
};

use super::DocumentBuilder;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ContainerKind {
    Paragraph,
    Heading(HeadingLevel),
    Quote,
    ListItem,
    CodeBlock { language: Option<String> },
}

/// An open container collecting inline spans.
#[derive(Debug, Clone)]
pub struct Container {
    kind: ContainerKind,
    spans: Vec<InlineSpan>,
    checked: Option<bool>,
}

impl Container {
    fn new(kind: ContainerKind) -> Self {
        Self {
            kind,
            spans: vec![],
            checked: None,
        }
    }
}

/// An open list collecting finished items.
#[derive(Debug, Clone)]
pub struct List {
    variant: ListVariant,
    items: Vec<ListItem>,
}

/// [`DocumentBuilder`] producing an owned [`DocumentTree`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    root: Vec<BlockNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks currently attached to the root.
    pub fn blocks(&self) -> &[BlockNode] {
        &self.root
    }

    pub fn into_tree(self) -> DocumentTree {
        DocumentTree::new(self.root)
    }
}

impl DocumentBuilder for TreeBuilder {
    type Block = BlockNode;
    type Container = Container;
    type List = List;
    type Span = InlineSpan;

    fn create_paragraph(&mut self) -> Container {
        Container::new(ContainerKind::Paragraph)
    }

    fn create_heading(&mut self, level: HeadingLevel) -> Container {
        Container::new(ContainerKind::Heading(level))
    }

    fn create_quote(&mut self) -> Container {
        Container::new(ContainerKind::Quote)
    }

    fn create_list(&mut self, variant: ListVariant) -> List {
        List {
            variant,
            items: vec![],
        }
    }

    fn create_list_item(&mut self) -> Container {
        Container::new(ContainerKind::ListItem)
    }

    fn set_checked(&mut self, item: &mut Container, checked: bool) {
        item.checked = Some(checked);
    }

    fn create_code_block(&mut self, language: Option<&str>) -> Container {
        Container::new(ContainerKind::CodeBlock {
            language: language.map(str::to_string),
        })
    }

    fn create_text(&mut self, text: &str) -> InlineSpan {
        InlineSpan::plain(text)
    }

    fn create_link(&mut self, url: &str, text: InlineSpan) -> InlineSpan {
        InlineSpan::link(url, text.text())
    }

    fn apply_text_style(&mut self, span: &mut InlineSpan, style: TextStyle) {
        match span {
            InlineSpan::PlainText { text } => {
                let text = std::mem::take(text);
                *span = InlineSpan::formatted(text, StyleSet::EMPTY.with(style));
            }
            InlineSpan::FormattedText { styles, .. } => styles.insert(style),
            InlineSpan::Link { .. } => {
                log::warn!("ignoring {style:?} style on a link span");
            }
        }
    }

    fn append_inline(&mut self, container: &mut Container, span: InlineSpan) {
        container.spans.push(span);
    }

    fn append_item(&mut self, list: &mut List, item: Container) {
        list.items.push(ListItem {
            spans: item.spans,
            checked: item.checked,
        });
    }

    fn container_block(&mut self, container: Container) -> BlockNode {
        let Container { kind, spans, .. } = container;
        match kind {
            ContainerKind::Paragraph => BlockNode::Paragraph { spans },
            ContainerKind::Heading(level) => BlockNode::Heading { level, spans },
            ContainerKind::Quote => BlockNode::Quote { spans },
            ContainerKind::CodeBlock { language } => BlockNode::CodeBlock {
                language,
                body: spans.iter().map(InlineSpan::text).collect(),
            },
            ContainerKind::ListItem => {
                log::warn!("list item used as a root block, keeping it as a paragraph");
                BlockNode::Paragraph { spans }
            }
        }
    }

    fn list_block(&mut self, list: List) -> BlockNode {
        BlockNode::List {
            variant: list.variant,
            items: list.items,
        }
    }

    fn clear_root(&mut self) {
        self.root.clear();
    }

    fn append_root(&mut self, block: BlockNode) {
        self.root.push(block);
    }
}
