//! Add Card Dialog
//!
//! Numeric input dialog for entering a cartela number. Submission stays
//! disabled while the input is not a number in 1-2000, so invalid input
//! never reaches the store.

use crate::constants::{MAX_CARTELA_NUMBER, MIN_CARTELA_NUMBER};
use crate::tui::component::{centered_rect, Component};
use crate::tui::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Events emitted by the add card dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCardDialogEvent {
    /// User submitted a valid cartela number (raw input string)
    Submitted(String),
    /// User cancelled the operation
    Cancelled,
}

/// Add card dialog component state
#[derive(Debug, Clone, Default)]
pub struct AddCardDialog {
    /// Current input buffer
    input: String,
    /// Error message shown after a refused submit
    error: Option<String>,
}

impl AddCardDialog {
    /// Creates a new add card dialog with an empty input buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input buffer contents.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Checks whether the current input is a cartela number in range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.input
            .trim()
            .parse::<u32>()
            .is_ok_and(|n| (MIN_CARTELA_NUMBER..=MAX_CARTELA_NUMBER).contains(&n))
    }
}

impl Component for AddCardDialog {
    type Event = AddCardDialogEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() && self.input.len() < 4 => {
                self.input.push(c);
                self.error = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
            }
            KeyCode::Enter => {
                if self.is_valid() {
                    return Some(AddCardDialogEvent::Submitted(self.input.clone()));
                }
                self.error = Some(format!(
                    "Enter a number between {MIN_CARTELA_NUMBER} and {MAX_CARTELA_NUMBER}"
                ));
            }
            KeyCode::Esc => {
                return Some(AddCardDialogEvent::Cancelled);
            }
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(50, 40, area);

        frame.render_widget(Clear, dialog_area);
        let background = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(background, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Input field
                Constraint::Min(2),    // Error message (if any)
                Constraint::Length(2), // Help text
            ])
            .split(dialog_area);

        let title = Paragraph::new("Enter Cartela Number")
            .style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(title, chunks[0]);

        let input_text = format!("{}█", self.input);
        let input = Paragraph::new(input_text)
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(
                        " Number ({MIN_CARTELA_NUMBER}-{MAX_CARTELA_NUMBER}) "
                    ))
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(input, chunks[1]);

        if let Some(ref error) = self.error {
            let error_widget = Paragraph::new(error.as_str())
                .style(Style::default().fg(theme.error))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Error ")
                        .style(Style::default().bg(theme.background)),
                );
            frame.render_widget(error_widget, chunks[2]);
        }

        let submit_style = if self.is_valid() {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        let help = Paragraph::new(vec![Line::from(vec![
            Span::styled("Enter", submit_style),
            Span::raw(" Add card  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Cancel"),
        ])])
        .style(Style::default().fg(theme.text).bg(theme.background));
        frame.render_widget(help, chunks[3]);
    }
}
