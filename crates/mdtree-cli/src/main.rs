mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mdtree_config::{Config, RenderConfig};
use mdtree_engine::{LoadOutcome, MarkdownLoader, io, parse_markdown};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use render::TerminalBuilder;
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

struct App {
    notes_path: PathBuf,
    files: Vec<RelativePathBuf>,
    file_list_state: ListState,
    render: RenderConfig,
    loader: MarkdownLoader,
    current_content: Vec<Line<'static>>,
}

impl App {
    fn new(notes_path: PathBuf, render: RenderConfig) -> Result<Self> {
        let files = io::scan_markdown_files(&notes_path)?
            .iter()
            .filter_map(|path| relative_to(path, &notes_path))
            .collect();

        let mut app = Self {
            notes_path,
            files,
            file_list_state: ListState::default(),
            render,
            loader: MarkdownLoader::new(),
            current_content: Vec::new(),
        };

        // Select first file if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            return;
        };

        match io::read_file(file, &self.notes_path) {
            Ok(content) => {
                // A new file replaces the whole document.
                self.loader.reset();
                let mut builder = TerminalBuilder::new(&self.render);
                match self.loader.load(&mut builder, Some(&content)) {
                    LoadOutcome::Loaded { blocks } => {
                        log::debug!("loaded {file} as {blocks} blocks");
                    }
                    outcome => log::warn!("unexpected load outcome for {file}: {outcome:?}"),
                }
                self.current_content = builder.into_lines();
            }
            Err(e) => {
                self.current_content = vec![Line::from(format!("Error reading file: {e}"))];
            }
        }
    }
}

fn relative_to(path: &Path, root: &Path) -> Option<RelativePathBuf> {
    let relative = path.strip_prefix(root).ok()?;
    RelativePathBuf::from_path(relative).ok()
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if args.len() == 3 && args[1] == "--json" {
        return dump_json(Path::new(&args[2]));
    }

    let notes_path;
    let from_config;
    let mut render = RenderConfig::default();

    if args.len() == 2 {
        // CLI argument provided - use it, but still honour render settings
        notes_path = PathBuf::from(&args[1]);
        from_config = false;
        match Config::load() {
            Ok(Some(config)) => render = config.render,
            Ok(None) => {}
            Err(e) => log::warn!("ignoring config file: {e}"),
        }
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                notes_path = config.notes_path;
                render = config.render;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No notes path provided and no config file found");
                eprintln!("Usage: {} <notes-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <notes-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [notes-folder-path]", args[0]);
        eprintln!("       {} --json <markdown-file>", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_notes_dir(&notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            notes_path.display(),
            source
        );
        process::exit(1);
    }

    let mut app = App::new(notes_path, render)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Prints the parsed tree of one file as JSON.
fn dump_json(path: &Path) -> Result<()> {
    let markdown = io::read_markdown(path)?;
    let tree = parse_markdown(&markdown);
    let json = serde_json::to_string_pretty(&tree)
        .with_context(|| format!("serializing {}", path.display()))?;
    println!("{json}");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(Line::from(format!("📄 {file}"))))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a file to view its content")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Content"))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]));

    f.render_widget(help, rows[1]);
}
