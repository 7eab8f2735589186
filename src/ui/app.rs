//! Main TUI application state and logic

use crate::viewer::{Domain, Selection, Viewer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Lines moved by PgUp/PgDn in the detail pane
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Search,
    List,
    Detail,
}

impl FocusedPane {
    pub fn label(self) -> &'static str {
        match self {
            FocusedPane::Search => "SEARCH",
            FocusedPane::List => "LIST",
            FocusedPane::Detail => "READ",
        }
    }
}

/// Per-tab scroll positions
#[derive(Debug, Default, Clone, Copy)]
struct PanelScroll {
    list: usize,
    detail: usize,
}

/// The main application state
pub struct App {
    pub viewer: Viewer,

    /// Tab currently shown
    pub active: Domain,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    reading_scroll: PanelScroll,
    math_scroll: PanelScroll,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,
}

impl App {
    pub fn new(viewer: Viewer, active: Domain) -> Self {
        let mut app = App {
            viewer,
            active,
            focused_pane: FocusedPane::List,
            reading_scroll: PanelScroll::default(),
            math_scroll: PanelScroll::default(),
            should_quit: false,
            status_message: String::new(),
            status_is_error: false,
        };
        app.startup_status();
        app
    }

    fn startup_status(&mut self) {
        let failed: Vec<&str> = [Domain::ReadingWriting, Domain::Math]
            .into_iter()
            .filter(|&d| self.viewer.view(d).is_error())
            .map(|d| d.name())
            .collect();
        if failed.is_empty() {
            self.set_status(format!("Loaded content from {}", self.viewer.source().describe()));
        } else {
            self.set_error(format!("Could not load {}", failed.join(", ")));
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: String) {
        self.status_message = message;
        self.status_is_error = true;
    }

    fn scroll_mut(&mut self, domain: Domain) -> &mut PanelScroll {
        match domain {
            Domain::ReadingWriting => &mut self.reading_scroll,
            Domain::Math => &mut self.math_scroll,
        }
    }

    /// Current detail scroll offset of the active tab
    pub fn detail_scroll(&self) -> usize {
        match self.active {
            Domain::ReadingWriting => self.reading_scroll.detail,
            Domain::Math => self.math_scroll.detail,
        }
    }

    /// Run the TUI application
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key).await;
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Tabs on top, panes in the middle, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(main_chunks[1]);

        super::panes::render_tabs(frame, main_chunks[0], self.active);

        let search_focused = self.focused_pane == FocusedPane::Search;
        let list_focused = self.focused_pane == FocusedPane::List;
        let detail_focused = self.focused_pane == FocusedPane::Detail;

        match self.active {
            Domain::ReadingWriting => {
                super::panes::render_list_pane(
                    frame,
                    columns[0],
                    "Lessons",
                    &self.viewer.reading.catalog,
                    search_focused,
                    list_focused,
                    &mut self.reading_scroll.list,
                );
                super::panes::render_detail_pane(
                    frame,
                    columns[1],
                    &self.viewer.reading.view,
                    detail_focused,
                    &mut self.reading_scroll.detail,
                );
            }
            Domain::Math => {
                super::panes::render_list_pane(
                    frame,
                    columns[0],
                    "Units",
                    &self.viewer.math.catalog,
                    search_focused,
                    list_focused,
                    &mut self.math_scroll.list,
                );
                super::panes::render_detail_pane(
                    frame,
                    columns[1],
                    &self.viewer.math.view,
                    detail_focused,
                    &mut self.math_scroll.detail,
                );
            }
        }

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.status_is_error,
            self.focused_pane.label(),
            search_focused,
        );
    }

    fn switch_tab(&mut self, domain: Domain) {
        if self.active != domain {
            self.active = domain;
            if self.focused_pane == FocusedPane::Search {
                self.focused_pane = FocusedPane::List;
            }
            self.set_status(format!("{} tab", domain.name()));
        }
    }

    /// Handle keyboard events
    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.focused_pane == FocusedPane::Search {
            self.handle_search_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => self.switch_tab(Domain::ReadingWriting),
            KeyCode::Char('2') => self.switch_tab(Domain::Math),
            KeyCode::Tab | KeyCode::BackTab => self.switch_tab(self.active.other()),
            KeyCode::Char('/') => {
                self.focused_pane = FocusedPane::Search;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.focused_pane = FocusedPane::List;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focused_pane = FocusedPane::Detail;
            }
            KeyCode::Up | KeyCode::Char('k') => match self.focused_pane {
                FocusedPane::Detail => self.scroll_detail(-1),
                _ => self.viewer.move_cursor(self.active, -1),
            },
            KeyCode::Down | KeyCode::Char('j') => match self.focused_pane {
                FocusedPane::Detail => self.scroll_detail(1),
                _ => self.viewer.move_cursor(self.active, 1),
            },
            KeyCode::PageUp | KeyCode::Char('K') => self.scroll_detail(-(PAGE as isize)),
            KeyCode::PageDown | KeyCode::Char('J') => self.scroll_detail(PAGE as isize),
            KeyCode::Home => self.scroll_mut(self.active).detail = 0,
            KeyCode::Enter => {
                if self.focused_pane == FocusedPane::List {
                    self.select().await;
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => {
                self.focused_pane = FocusedPane::List;
            }
            KeyCode::Backspace => {
                self.viewer.pop_filter_char(self.active);
                self.scroll_mut(self.active).list = 0;
            }
            KeyCode::Char(c) => {
                self.viewer.push_filter_char(self.active, c);
                self.scroll_mut(self.active).list = 0;
            }
            _ => {}
        }
    }

    fn scroll_detail(&mut self, delta: isize) {
        let scroll = self.scroll_mut(self.active);
        scroll.detail = scroll.detail.saturating_add_signed(delta);
    }

    /// Open the highlighted item of the active tab
    async fn select(&mut self) {
        let domain = self.active;
        match self.viewer.select(domain).await {
            Selection::Opened(label) => {
                self.scroll_mut(domain).detail = 0;
                self.set_status(format!("Opened {}", label));
            }
            Selection::Failed(e) => self.set_error(e.to_string()),
            Selection::Nothing => {}
        }
    }
}
