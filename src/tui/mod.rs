//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod add_card_dialog;
pub mod card_board;
pub mod card_list;
pub mod component;
pub mod help_overlay;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::GRID_SIZE;
use crate::store::CardStore;

pub use add_card_dialog::{AddCardDialog, AddCardDialogEvent};
pub use card_board::CardBoard;
pub use card_list::CardList;
pub use component::Component;
pub use help_overlay::{HelpOverlay, HelpOverlayEvent};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Currently active popup component.
pub enum ActiveComponent {
    /// Add card number entry dialog
    AddCard(AddCardDialog),
    /// Key binding help overlay
    Help(HelpOverlay),
}

/// Top-level application state driving the TUI.
pub struct AppState {
    /// Card store (owns the card list and persistence)
    pub store: CardStore,
    /// Application configuration
    pub config: Config,
    /// Current UI theme
    pub theme: Theme,
    /// Index of the selected card in the store's list
    pub selected_card: usize,
    /// Cell cursor position (row, col) on the selected card
    pub selected_cell: (usize, usize),
    /// Currently active popup (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the application state around a hydrated store.
    #[must_use]
    pub fn new(store: CardStore, config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let show_help = config.ui.show_help_on_startup;

        let mut state = Self {
            store,
            config,
            theme,
            selected_card: 0,
            selected_cell: (0, 0),
            active_component: None,
            status_message: "Press ? for help".to_string(),
            should_quit: false,
        };
        if show_help {
            state.open_help();
        }
        state
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Open the add card dialog
    pub fn open_add_card_dialog(&mut self) {
        self.active_component = Some(ActiveComponent::AddCard(AddCardDialog::new()));
    }

    /// Open the help overlay
    pub fn open_help(&mut self) {
        self.active_component = Some(ActiveComponent::Help(HelpOverlay::new()));
    }

    /// Close the currently active component
    pub fn close_component(&mut self) {
        self.active_component = None;
    }

    /// Id of the currently selected card, if any.
    #[must_use]
    pub fn selected_card_id(&self) -> Option<i64> {
        self.store.cards().get(self.selected_card).map(|c| c.id)
    }

    /// Selects the next card, wrapping around.
    pub fn select_next_card(&mut self) {
        let len = self.store.len();
        if len > 0 {
            self.selected_card = (self.selected_card + 1) % len;
        }
    }

    /// Selects the previous card, wrapping around.
    pub fn select_previous_card(&mut self) {
        let len = self.store.len();
        if len > 0 {
            self.selected_card = (self.selected_card + len - 1) % len;
        }
    }

    /// Moves the cell cursor by the given delta, clamped to the grid.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let (row, col) = self.selected_cell;
        let clamp = |v: isize| v.clamp(0, GRID_SIZE as isize - 1) as usize;
        self.selected_cell = (clamp(row as isize + d_row), clamp(col as isize + d_col));
    }

    /// Toggles the marking under the cell cursor.
    ///
    /// Free cells are refused here, before the store is even asked, so the
    /// cursor landing on the center cell can never flip a marking.
    pub fn toggle_selected_cell(&mut self) {
        let Some(card_id) = self.selected_card_id() else {
            self.set_status("No card selected. Press a to add one.");
            return;
        };
        let (row, col) = self.selected_cell;

        let is_free = self
            .store
            .get(card_id)
            .is_some_and(|c| c.numbers.is_free(row, col));
        if is_free {
            self.set_status("The free cell is always marked.");
            return;
        }

        self.store.toggle_cell(card_id, row, col);
    }

    /// Adds a card for the dialog's submitted input and selects it.
    pub fn add_card(&mut self, input: &str) {
        match self.store.add_card(input) {
            Some(_) => {
                self.selected_card = self.store.len() - 1;
                self.selected_cell = (0, 0);
                let name = self.store.cards()[self.selected_card].name.clone();
                self.set_status(format!("Added {name}"));
            }
            // The dialog refuses invalid input, but the store re-checks
            None => self.set_status("Cartela number must be between 1 and 2000."),
        }
    }

    /// Deletes the selected card.
    pub fn delete_selected_card(&mut self) {
        let Some(card_id) = self.selected_card_id() else {
            return;
        };
        let name = self
            .store
            .get(card_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        self.store.delete_card(card_id);
        if self.selected_card >= self.store.len() && self.selected_card > 0 {
            self.selected_card -= 1;
        }
        self.set_status(format!("Deleted {name}"));
    }

    /// Clears the markings on every card.
    pub fn reset_all_marks(&mut self) {
        self.store.reset_all_marks();
        self.set_status("All markings reset.");
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(state, key);
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Dispatch a key press to the active popup or the main view.
fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    match state.active_component.take() {
        Some(ActiveComponent::AddCard(mut dialog)) => match dialog.handle_input(key) {
            Some(AddCardDialogEvent::Submitted(input)) => state.add_card(&input),
            Some(AddCardDialogEvent::Cancelled) => {}
            None => state.active_component = Some(ActiveComponent::AddCard(dialog)),
        },
        Some(ActiveComponent::Help(mut overlay)) => match overlay.handle_input(key) {
            Some(HelpOverlayEvent::Closed) => {}
            None => state.active_component = Some(ActiveComponent::Help(overlay)),
        },
        None => handle_main_key(state, key),
    }
}

/// Key handling for the main view (no popup active).
fn handle_main_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('a') => state.open_add_card_dialog(),
        KeyCode::Char('?') => state.open_help(),
        KeyCode::Char('d') => state.delete_selected_card(),
        KeyCode::Char('r') => state.reset_all_marks(),
        KeyCode::Tab | KeyCode::Char('n') => state.select_next_card(),
        KeyCode::BackTab | KeyCode::Char('p') => state.select_previous_card(),
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(1, 0),
        KeyCode::Left | KeyCode::Char('h') => state.move_cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => state.move_cursor(0, 1),
        KeyCode::Char(' ') | KeyCode::Enter => state.toggle_selected_cell(),
        KeyCode::Char(c) if key.modifiers == KeyModifiers::NONE && c.is_ascii_digit() => {
            // Typing a digit in the main view is almost always an attempt
            // to add a card; open the dialog with it
            let mut dialog = AddCardDialog::new();
            dialog.handle_input(key);
            state.active_component = Some(ActiveComponent::AddCard(dialog));
        }
        _ => {}
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(9),    // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    match &state.active_component {
        Some(ActiveComponent::AddCard(dialog)) => dialog.render(f, f.area(), &state.theme),
        Some(ActiveComponent::Help(overlay)) => overlay.render(f, f.area(), &state.theme),
        None => {}
    }
}

/// Render title bar with app name and card count
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {} - {} card(s)", APP_NAME, state.store.len());

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render the card list and the selected card's board.
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    if state.store.is_empty() {
        let welcome = Paragraph::new(vec![
            Line::from(""),
            Line::from(format!("Welcome to {APP_NAME}!")),
            Line::from(""),
            Line::from("Press a to add your first cartela card."),
        ])
        .style(
            Style::default()
                .fg(state.theme.text)
                .bg(state.theme.background),
        )
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );
        f.render_widget(welcome, area);
        return;
    }

    let chunks = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(34)])
        .split(area);

    CardList::render(
        f,
        chunks[0],
        state.store.cards(),
        state.selected_card,
        &state.theme,
    );

    if let Some(card) = state.store.cards().get(state.selected_card) {
        CardBoard::render(f, chunks[1], card, state.selected_cell, &state.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CartelaCatalog;
    use crate::models::CellValue;
    use crate::storage::MemoryStorage;
    use std::collections::HashMap;

    fn fixture_state() -> AppState {
        let mut rows = [[CellValue::Free; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = CellValue::Number((r * GRID_SIZE + c + 1) as u8);
            }
        }
        rows[2][2] = CellValue::Free;
        let catalog = CartelaCatalog::from_layouts(HashMap::from([(1, rows)]));

        let store = CardStore::load(catalog, Box::new(MemoryStorage::new()));
        AppState::new(store, Config::new())
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        let mut state = fixture_state();
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn test_add_card_through_dialog() {
        let mut state = fixture_state();
        press(&mut state, KeyCode::Char('a'));
        assert!(matches!(
            state.active_component,
            Some(ActiveComponent::AddCard(_))
        ));

        press(&mut state, KeyCode::Char('1'));
        press(&mut state, KeyCode::Enter);

        assert!(state.active_component.is_none());
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.selected_card, 0);
    }

    #[test]
    fn test_digit_shortcut_opens_dialog_prefilled() {
        let mut state = fixture_state();
        press(&mut state, KeyCode::Char('7'));

        match &state.active_component {
            Some(ActiveComponent::AddCard(dialog)) => assert_eq!(dialog.input(), "7"),
            _ => panic!("expected add card dialog"),
        }
    }

    #[test]
    fn test_cursor_movement_clamps() {
        let mut state = fixture_state();
        press(&mut state, KeyCode::Up);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.selected_cell, (0, 0));

        for _ in 0..10 {
            press(&mut state, KeyCode::Down);
            press(&mut state, KeyCode::Right);
        }
        assert_eq!(state.selected_cell, (4, 4));
    }

    #[test]
    fn test_toggle_and_free_cell_guard() {
        let mut state = fixture_state();
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Char('1'));
        press(&mut state, KeyCode::Enter);

        press(&mut state, KeyCode::Char(' '));
        let id = state.selected_card_id().unwrap();
        assert!(state.store.get(id).unwrap().marked_cells.is_marked(0, 0));

        // Move the cursor onto the free center cell; toggling must not mark
        state.selected_cell = (2, 2);
        press(&mut state, KeyCode::Char(' '));
        assert!(!state.store.get(id).unwrap().marked_cells.is_marked(2, 2));
    }

    #[test]
    fn test_card_selection_wraps() {
        let mut state = fixture_state();
        for _ in 0..3 {
            press(&mut state, KeyCode::Char('a'));
            press(&mut state, KeyCode::Char('1'));
            press(&mut state, KeyCode::Enter);
        }
        assert_eq!(state.selected_card, 2);

        press(&mut state, KeyCode::Tab);
        assert_eq!(state.selected_card, 0);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.selected_card, 2);
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut state = fixture_state();
        for _ in 0..2 {
            press(&mut state, KeyCode::Char('a'));
            press(&mut state, KeyCode::Char('1'));
            press(&mut state, KeyCode::Enter);
        }
        assert_eq!(state.selected_card, 1);

        press(&mut state, KeyCode::Char('d'));
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.selected_card, 0);

        press(&mut state, KeyCode::Char('d'));
        assert!(state.store.is_empty());
        // Deleting with nothing selected stays a no-op
        press(&mut state, KeyCode::Char('d'));
    }

    #[test]
    fn test_reset_shortcut() {
        let mut state = fixture_state();
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Char('1'));
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char(' '));

        press(&mut state, KeyCode::Char('r'));
        assert!(state.store.cards()[0].marked_cells.is_clear());
    }

    #[test]
    fn test_help_overlay_toggle() {
        let mut state = fixture_state();
        press(&mut state, KeyCode::Char('?'));
        assert!(matches!(
            state.active_component,
            Some(ActiveComponent::Help(_))
        ));

        press(&mut state, KeyCode::Char('x'));
        assert!(state.active_component.is_none());
    }
}
