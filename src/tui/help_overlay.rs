//! Help overlay listing all key bindings.

use crate::tui::component::{centered_rect, Component};
use crate::tui::Theme;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Events emitted by the help overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// Overlay was dismissed
    Closed,
}

/// Help overlay component
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpOverlay;

impl HelpOverlay {
    /// Creates the help overlay.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

const BINDINGS: &[(&str, &str)] = &[
    ("a", "Add a card by cartela number"),
    ("Arrows / hjkl", "Move the cell cursor"),
    ("Space / Enter", "Mark or unmark the selected cell"),
    ("Tab / n", "Next card"),
    ("Shift-Tab / p", "Previous card"),
    ("d", "Delete the selected card"),
    ("r", "Reset all markings"),
    ("?", "Toggle this help"),
    ("q / Esc", "Quit"),
];

impl Component for HelpOverlay {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, _key: KeyEvent) -> Option<Self::Event> {
        // Any key dismisses the overlay
        Some(HelpOverlayEvent::Closed)
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let overlay_area = centered_rect(60, 70, area);

        frame.render_widget(Clear, overlay_area);

        let mut lines: Vec<Line> = vec![Line::from("")];
        for (keys, action) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {keys:<16}"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  The free center cell is always satisfied and cannot be toggled.",
            Style::default().fg(theme.text_muted),
        )));

        let help = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );
        frame.render_widget(help, overlay_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_any_key_closes() {
        let mut overlay = HelpOverlay::new();
        let event = overlay.handle_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(event, Some(HelpOverlayEvent::Closed));
    }
}
