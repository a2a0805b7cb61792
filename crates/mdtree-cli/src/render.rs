//! A [`DocumentBuilder`] that renders straight to styled terminal lines.

use mdtree_config::RenderConfig;
use mdtree_engine::{DocumentBuilder, HeadingLevel, ListVariant, TextStyle};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

enum Kind {
    Paragraph,
    Heading(HeadingLevel),
    Quote,
    ListItem,
    CodeBlock(Option<String>),
}

pub struct Container {
    kind: Kind,
    spans: Vec<Span<'static>>,
    checked: Option<bool>,
}

impl Container {
    fn new(kind: Kind) -> Self {
        Self {
            kind,
            spans: Vec::new(),
            checked: None,
        }
    }
}

pub struct List {
    variant: ListVariant,
    items: Vec<Container>,
}

/// Builds `ratatui` lines for the content pane, one block at a time.
pub struct TerminalBuilder<'a> {
    render: &'a RenderConfig,
    lines: Vec<Line<'static>>,
}

impl<'a> TerminalBuilder<'a> {
    pub fn new(render: &'a RenderConfig) -> Self {
        Self {
            render,
            lines: Vec::new(),
        }
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }

    fn item_marker(&self, variant: ListVariant, index: usize, checked: Option<bool>) -> String {
        match (variant, checked) {
            (ListVariant::Numbered, _) => format!("{}. ", index + 1),
            (ListVariant::Checkbox, Some(true)) => format!("{} ", self.render.checked),
            (ListVariant::Checkbox, _) => format!("{} ", self.render.unchecked),
            (ListVariant::Bullet, _) => format!("{} ", self.render.bullet),
        }
    }
}

fn prefixed(prefix: String, style: Style, spans: Vec<Span<'static>>) -> Line<'static> {
    let mut all = Vec::with_capacity(spans.len() + 1);
    all.push(Span::styled(prefix, style));
    all.extend(spans);
    Line::from(all)
}

impl DocumentBuilder for TerminalBuilder<'_> {
    type Block = Vec<Line<'static>>;
    type Container = Container;
    type List = List;
    type Span = Span<'static>;

    fn create_paragraph(&mut self) -> Container {
        Container::new(Kind::Paragraph)
    }

    fn create_heading(&mut self, level: HeadingLevel) -> Container {
        Container::new(Kind::Heading(level))
    }

    fn create_quote(&mut self) -> Container {
        Container::new(Kind::Quote)
    }

    fn create_list(&mut self, variant: ListVariant) -> List {
        List {
            variant,
            items: Vec::new(),
        }
    }

    fn create_list_item(&mut self) -> Container {
        Container::new(Kind::ListItem)
    }

    fn set_checked(&mut self, item: &mut Container, checked: bool) {
        item.checked = Some(checked);
    }

    fn create_code_block(&mut self, language: Option<&str>) -> Container {
        Container::new(Kind::CodeBlock(language.map(str::to_string)))
    }

    fn create_text(&mut self, text: &str) -> Span<'static> {
        Span::raw(text.to_string())
    }

    fn create_link(&mut self, url: &str, text: Span<'static>) -> Span<'static> {
        log::trace!("link to {url}");
        text.style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        )
    }

    fn apply_text_style(&mut self, span: &mut Span<'static>, style: TextStyle) {
        span.style = match style {
            TextStyle::Bold => span.style.add_modifier(Modifier::BOLD),
            TextStyle::Italic => span.style.add_modifier(Modifier::ITALIC),
            TextStyle::Strikethrough => span.style.add_modifier(Modifier::CROSSED_OUT),
            TextStyle::Code => span.style.fg(Color::Yellow),
        };
    }

    fn append_inline(&mut self, container: &mut Container, span: Span<'static>) {
        container.spans.push(span);
    }

    fn append_item(&mut self, list: &mut List, item: Container) {
        list.items.push(item);
    }

    fn container_block(&mut self, container: Container) -> Vec<Line<'static>> {
        let Container { kind, spans, .. } = container;
        match kind {
            Kind::Paragraph | Kind::ListItem => vec![Line::from(spans)],
            Kind::Heading(level) => {
                let style = Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD);
                let prefix = format!("{} ", "#".repeat(usize::from(level.get())));
                vec![prefixed(prefix, style, spans).style(style)]
            }
            Kind::Quote => {
                let style = Style::default().fg(Color::DarkGray);
                vec![prefixed("│ ".to_string(), style, spans).style(Modifier::ITALIC)]
            }
            Kind::CodeBlock(language) => {
                let style = Style::default().fg(Color::Green);
                let body: String = spans.iter().map(|span| span.content.as_ref()).collect();
                let mut lines = Vec::new();
                if let Some(language) = language.filter(|_| self.render.label_code_language) {
                    lines.push(Line::styled(
                        format!("[{language}]"),
                        style.add_modifier(Modifier::DIM),
                    ));
                }
                lines.extend(
                    body.split('\n')
                        .map(|line| Line::styled(format!("  {line}"), style)),
                );
                lines
            }
        }
    }

    fn list_block(&mut self, list: List) -> Vec<Line<'static>> {
        let marker_style = Style::default().fg(Color::Blue);
        list.items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let marker = self.item_marker(list.variant, index, item.checked);
                let line = prefixed(marker, marker_style, item.spans);
                if item.checked == Some(true) {
                    line.style(Modifier::DIM)
                } else {
                    line
                }
            })
            .collect()
    }

    fn clear_root(&mut self) {
        self.lines.clear();
    }

    fn append_root(&mut self, block: Vec<Line<'static>>) {
        self.lines.extend(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdtree_engine::{LoadOutcome, MarkdownLoader};
    use pretty_assertions::assert_eq;

    fn render(markdown: &str, config: &RenderConfig) -> Vec<String> {
        let mut builder = TerminalBuilder::new(config);
        let outcome = MarkdownLoader::new().load(&mut builder, Some(markdown));
        assert!(matches!(outcome, LoadOutcome::Loaded { .. }));
        builder
            .into_lines()
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn renders_blocks_as_text_lines() {
        let lines = render(
            "## Title\n> said\n- [x] done\n- [ ] todo\n1. one\n2. two\n- dash",
            &RenderConfig::default(),
        );
        assert_eq!(
            lines,
            vec![
                "## Title", "│ said", "☑ done", "☐ todo", "1. one", "2. two", "• dash",
            ]
        );
    }

    #[test]
    fn code_block_label_follows_config() {
        let md = "```rust\nlet x = 1;\n```";
        let labelled = render(md, &RenderConfig::default());
        assert_eq!(labelled, vec!["[rust]", "  let x = 1;"]);

        let config = RenderConfig {
            label_code_language: false,
            ..RenderConfig::default()
        };
        assert_eq!(render(md, &config), vec!["  let x = 1;"]);
    }

    #[test]
    fn custom_bullet_glyph() {
        let config = RenderConfig {
            bullet: "*".to_string(),
            ..RenderConfig::default()
        };
        assert_eq!(render("- a", &config), vec!["* a"]);
    }

    #[test]
    fn inline_styles_become_modifiers() {
        let config = RenderConfig::default();
        let mut builder = TerminalBuilder::new(&config);
        MarkdownLoader::new().load(&mut builder, Some("x ***y*** [l](u)"));
        let lines = builder.into_lines();
        let spans = &lines[0].spans;

        assert_eq!(spans[1].content, "y");
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD | Modifier::ITALIC));
        assert_eq!(spans[3].content, "l");
        assert!(spans[3].style.add_modifier.contains(Modifier::UNDERLINED));
    }
}
