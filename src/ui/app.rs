//! Main TUI application state and logic

use crate::analysis::{analyze, Analysis};
use crate::ui::panes::{self, TableTab};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Messages,
    Tables,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> messages -> tables)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Messages,
            FocusedPane::Messages => FocusedPane::Tables,
            FocusedPane::Tables => FocusedPane::Source,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tables,
            FocusedPane::Messages => FocusedPane::Source,
            FocusedPane::Tables => FocusedPane::Messages,
        }
    }
}

/// The main application state
pub struct App {
    /// The source text being analysed
    pub source: String,

    /// File the source was loaded from; `None` for the bundled demo
    pub path: Option<PathBuf>,

    /// Result of the latest analysis run
    pub analysis: Analysis,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Selected tab of the tables pane
    pub table_tab: TableTab,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub messages_scroll: usize,
    pub tables_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app and analyse `source` once.
    pub fn new(source: String, path: Option<PathBuf>) -> Self {
        let analysis = analyze(&source);
        let status_message = analysis.verdict.to_string();
        App {
            source,
            path,
            analysis,
            focused_pane: FocusedPane::Source,
            table_tab: TableTab::Keywords,
            source_scroll: 0,
            messages_scroll: 0,
            tables_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        // Right column: Messages (top) | Tables (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        panes::render_source_pane(
            frame,
            columns[0],
            &self.source,
            self.analysis.error().map(|err| err.line()),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_messages_pane(
            frame,
            right_rows[0],
            &self.analysis,
            self.focused_pane == FocusedPane::Messages,
            &mut self.messages_scroll,
        );

        panes::render_tables_pane(
            frame,
            right_rows[1],
            &self.analysis,
            self.table_tab,
            self.focused_pane == FocusedPane::Tables,
            &mut self.tables_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &self.analysis.verdict,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.table_tab = self.table_tab.prev();
                self.tables_scroll = 0;
            }
            KeyCode::Right => {
                self.table_tab = self.table_tab.next();
                self.tables_scroll = 0;
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                // panes clamp the offset on the next render
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reload();
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Messages => &mut self.messages_scroll,
            FocusedPane::Tables => &mut self.tables_scroll,
        }
    }

    /// Re-read the source file (if any) and analyse it again.
    pub fn reload(&mut self) {
        if let Some(path) = &self.path {
            match fs::read_to_string(path) {
                Ok(source) => self.source = source,
                Err(e) => {
                    self.status_message = format!("Cannot read {}: {}", path.display(), e);
                    return;
                }
            }
        }

        self.analysis = analyze(&self.source);
        self.messages_scroll = 0;
        self.tables_scroll = 0;
        self.status_message = format!("Reloaded: {}", self.analysis.verdict);
    }
}
