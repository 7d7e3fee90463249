//! Terminal map view using ratatui
//!
//! Shows the same information as the HTML page without the map itself:
//! - Header with passport and any load error
//! - Color-coded legend with per-category counts
//! - Scrollable, alphabetically sorted country lists

mod components;

use anyhow::Result;
use crossterm::cursor::Show;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

use components::{CountryListPanel, HeaderPanel, LegendPanel};

use crate::render::MapSummary;

/// Selection state of the terminal view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selected: usize,
    pub offset: usize,
    pub should_quit: bool,
}

impl ViewState {
    /// Apply a key press. `tabs` is the number of lists, `len` the length of
    /// the selected one.
    pub fn handle_key(&mut self, code: KeyCode, tabs: usize, len: usize) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => {
                self.selected = (self.selected + 1) % tabs.max(1);
                self.offset = 0;
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.selected = (self.selected + tabs.max(1) - 1) % tabs.max(1);
                self.offset = 0;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.offset + 1 < len {
                    self.offset += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.offset = self.offset.saturating_sub(1),
            KeyCode::Home => self.offset = 0,
            _ => {}
        }
    }
}

/// Lay out and draw one frame
pub fn draw_view(frame: &mut Frame, summary: &MapSummary, state: &ViewState) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Legend
            Constraint::Min(5),    // Country lists
        ])
        .split(area);

    HeaderPanel::new(summary).render(frame, chunks[0]);
    LegendPanel::new(summary).render(frame, chunks[1]);
    CountryListPanel::new(summary, state.selected, state.offset).render(frame, chunks[2]);
}

/// Owns the raw mode and alternate screen of the real terminal.
///
/// Released once, either explicitly or on drop.
#[derive(Debug)]
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self { active: true };
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(guard)
    }

    /// A guard with nothing to restore
    pub fn inactive() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Leave raw mode and the alternate screen and show the cursor
    pub fn release(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(LeaveAlternateScreen)?;
        stdout.execute(Show)?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best effort cleanup
        self.release().ok();
    }
}

/// Full-screen viewer
pub struct UiApp<B: Backend> {
    terminal: Terminal<B>,
    state: ViewState,
    guard: Option<TerminalGuard>,
}

impl UiApp<CrosstermBackend<Stdout>> {
    /// Enter raw mode and the alternate screen
    pub fn new() -> Result<Self> {
        let guard = TerminalGuard::acquire()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state: ViewState::default(),
            guard: Some(guard),
        })
    }

    /// Draw and handle keys until the user quits, then restore the terminal
    pub fn run(mut self, summary: &MapSummary) -> Result<()> {
        while !self.state.should_quit {
            self.draw(summary)?;

            if event::poll(Duration::from_millis(250))? {
                if let CrosstermEvent::Key(KeyEvent { code, kind, .. }) = event::read()? {
                    if kind == KeyEventKind::Press {
                        let len = summary
                            .lists
                            .get(self.state.selected)
                            .map(|(_, names)| names.len())
                            .unwrap_or(0);
                        self.state.handle_key(code, summary.lists.len(), len);
                    }
                }
            }
        }

        self.restore()
    }
}

impl<B: Backend> UiApp<B> {
    /// Viewer over any backend, e.g. `TestBackend`
    pub fn with_terminal(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            state: ViewState::default(),
            guard: None,
        }
    }

    /// Restore the terminal if this viewer set it up
    pub fn restore(&mut self) -> Result<()> {
        if let Some(guard) = self.guard.as_mut() {
            guard.release()?;
        }
        Ok(())
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn draw(&mut self, summary: &MapSummary) -> Result<()> {
        let state = &self.state;
        self.terminal.draw(|frame| draw_view(frame, summary, state))?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Precedence;
    use crate::dataset::{ListSource, LoadedLists, VisaLists};
    use crate::iso::IsoTable;
    use crate::pipeline::{Settings, VisaMap};
    use ratatui::backend::TestBackend;

    fn summary() -> MapSummary {
        let loaded = LoadedLists {
            lists: VisaLists::embedded(),
            source: ListSource::Embedded,
            error: None,
        };
        let settings = Settings {
            precedence: Precedence::default(),
            ..Settings::default()
        };
        VisaMap::from_lists(loaded, IsoTable::shared(), &settings).summary
    }

    #[test]
    fn test_handle_key() {
        let mut state = ViewState::default();
        state.handle_key(KeyCode::Down, 3, 2);
        state.handle_key(KeyCode::Down, 3, 2);
        assert_eq!(state.offset, 1);
        state.handle_key(KeyCode::Tab, 3, 2);
        assert_eq!((state.selected, state.offset), (1, 0));
        state.handle_key(KeyCode::Left, 3, 2);
        state.handle_key(KeyCode::Left, 3, 2);
        assert_eq!(state.selected, 2);
        state.handle_key(KeyCode::Char('q'), 3, 2);
        assert!(state.should_quit);
    }

    #[test]
    fn test_inactive_guard_releases_nothing() {
        let mut guard = TerminalGuard::inactive();
        assert!(!guard.is_active());
        guard.release().unwrap();
        guard.release().unwrap();
        assert!(!guard.is_active());
    }

    #[test]
    fn test_test_backend_owns_no_terminal() {
        let terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut app = UiApp::with_terminal(terminal);
        assert!(app.guard.is_none());
        app.restore().unwrap();
        drop(app);
    }

    #[test]
    fn test_draw_legend_and_list() {
        let summary = summary();
        let terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut app = UiApp::with_terminal(terminal);
        app.draw(&summary).unwrap();

        let buffer = app.terminal().backend().buffer().clone();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Visa Free (21)"));
        assert!(text.contains("Visa on Arrival (20)"));
        assert!(text.contains("e-Visa (51)"));
        assert!(text.contains("Visa Required"));
        assert!(!text.contains("Visa Required ("));
        assert!(text.contains("Bahamas"));

        app.state_mut().selected = 2;
        app.draw(&summary).unwrap();
        let buffer = app.terminal().backend().buffer().clone();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Albania"));
    }
}
