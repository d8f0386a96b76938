//! Main application state and TUI event loop for the caddie dashboard.
//!
//! [`App`] owns the theme, view mode, the ingested [`Session`] and the live
//! [`ClubFilter`]. Every frame re-queries the repository and re-runs the
//! aggregator against the current filter; derived views are never cached
//! across filter changes.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use caddie_core::models::ClubFilter;
use caddie_data::aggregator::ClubAggregator;
use caddie_data::session::Session;

use crate::components::header::Header;
use crate::themes::Theme;
use crate::{dispersion_view, gapping_view, table_view};

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which view the TUI is currently rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// All three panels stacked: dispersion, gapping, shot table.
    Dashboard,
    /// Full-screen dispersion scatter.
    Dispersion,
    /// Full-screen gapping bars.
    Gapping,
    /// Full-screen shot table.
    Table,
}

impl ViewMode {
    /// Construct a view mode by name. Falls back to `Dashboard` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dispersion" => Self::Dispersion,
            "gapping" => Self::Gapping,
            "table" => Self::Table,
            _ => Self::Dashboard,
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the caddie TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Current view mode.
    pub view_mode: ViewMode,
    /// Current club selection; re-applied on every frame.
    pub filter: ClubFilter,
    /// Whether the club filter side panel is open.
    pub filter_open: bool,
    /// Cursor position within the filter panel's club list.
    pub cursor: usize,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    /// The ingested session this app instance is bound to.
    session: Session,
    /// Sorted distinct clubs, fixed for the session's lifetime.
    clubs: Vec<String>,
}

impl App {
    /// Construct a new application bound to one ingested session.
    pub fn new(theme_name: &str, view_mode: ViewMode, session: Session, filter: ClubFilter) -> Self {
        let clubs: Vec<String> = session.repository().distinct_clubs().into_iter().collect();
        Self {
            theme: Theme::from_name(theme_name),
            view_mode,
            filter,
            filter_open: false,
            cursor: 0,
            should_quit: false,
            session,
            clubs,
        }
    }

    // ── Public event loop ─────────────────────────────────────────────────────

    /// Run the dashboard event loop until `q` / `Ctrl+C`.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout; the pipeline is
    /// synchronous end to end, so there is no background task to wait on.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Input handling ────────────────────────────────────────────────────────

    /// Apply one key event to the application state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,

            // View switching.
            KeyCode::Char('0') => self.view_mode = ViewMode::Dashboard,
            KeyCode::Char('1') => self.view_mode = ViewMode::Dispersion,
            KeyCode::Char('2') => self.view_mode = ViewMode::Gapping,
            KeyCode::Char('3') => self.view_mode = ViewMode::Table,

            // Filter panel.
            KeyCode::Char('f') | KeyCode::Char('F') => self.filter_open = !self.filter_open,
            KeyCode::Esc => self.filter_open = false,
            KeyCode::Char('a') | KeyCode::Char('A') => self.filter.clear(),
            KeyCode::Up if self.filter_open => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down if self.filter_open => {
                self.cursor = (self.cursor + 1).min(self.clubs.len().saturating_sub(1));
            }
            KeyCode::Char(' ') if self.filter_open => self.toggle_selected_club(),

            _ => {}
        }
    }

    /// Toggle the club under the cursor in the filter panel.
    ///
    /// When the selection is empty (implicit select-all), it is first
    /// materialized to every club, so unchecking one club keeps the rest
    /// selected instead of selecting only the toggled club.
    fn toggle_selected_club(&mut self) {
        let Some(club) = self.clubs.get(self.cursor).cloned() else {
            return;
        };
        if self.filter.is_empty() {
            for c in &self.clubs {
                self.filter.toggle(c);
            }
        }
        self.filter.toggle(&club);
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let repository = self.session.repository();
        let filtered = repository.filter(&self.filter);

        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        let source = self.session.source_name();
        let header = Header::new(&source, filtered.len(), self.clubs.len(), &self.theme);
        frame.render_widget(Paragraph::new(header.to_lines()), header_area);

        let content_area = if self.filter_open {
            let [main, panel] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(26)]).areas(body_area);
            self.render_filter_panel(frame, panel);
            main
        } else {
            body_area
        };

        if filtered.is_empty() {
            table_view::render_no_data(frame, content_area, &self.theme);
            return;
        }

        // Derived views, recomputed from the repository on every frame.
        let summaries = ClubAggregator::aggregate(&filtered);
        let overall = ClubAggregator::overall(&filtered);
        let points = repository.dispersion(&self.filter);

        match self.view_mode {
            ViewMode::Dashboard => {
                let gapping_height = (summaries.len() as u16).saturating_add(2).min(12);
                let [dispersion_area, gapping_area, table_area] = Layout::vertical([
                    Constraint::Percentage(45),
                    Constraint::Length(gapping_height),
                    Constraint::Min(5),
                ])
                .areas(content_area);

                dispersion_view::render_dispersion(frame, dispersion_area, &points, &self.theme);
                gapping_view::render_gapping(frame, gapping_area, &summaries, &self.theme);
                table_view::render_shot_table(
                    frame,
                    table_area,
                    "Shot Data",
                    &filtered,
                    overall.as_ref(),
                    &self.theme,
                );
            }
            ViewMode::Dispersion => {
                dispersion_view::render_dispersion(frame, content_area, &points, &self.theme);
            }
            ViewMode::Gapping => {
                gapping_view::render_gapping(frame, content_area, &summaries, &self.theme);
            }
            ViewMode::Table => {
                table_view::render_shot_table(
                    frame,
                    content_area,
                    "Shot Data",
                    &filtered,
                    overall.as_ref(),
                    &self.theme,
                );
            }
        }
    }

    /// Render the club filter side panel with one checkbox row per club.
    fn render_filter_panel(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .clubs
            .iter()
            .enumerate()
            .map(|(i, club)| {
                let mark = if self.filter.matches(club) {
                    "[x] "
                } else {
                    "[ ] "
                };
                let style = if i == self.cursor {
                    self.theme.value
                } else {
                    self.theme.text
                };
                Line::from(vec![
                    Span::styled(mark, style),
                    Span::styled(club.clone(), style),
                ])
            })
            .collect();

        frame.render_widget(
            Paragraph::new(Text::from(lines)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Clubs (space toggles) "),
            ),
            area,
        );
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
