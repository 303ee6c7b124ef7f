//! Status bar widget: current status message plus key hints.

use crate::tui::{AppState, Theme};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Stateless widget that renders the bottom status bar.
pub struct StatusBar;

impl StatusBar {
    /// Renders the status bar into `area`.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let hint_spans = [
            ("a", "add"),
            ("Space", "mark"),
            ("Tab", "next card"),
            ("d", "delete"),
            ("r", "reset"),
            ("?", "help"),
            ("q", "quit"),
        ]
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(
                    *key,
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {action}  "), Style::default().fg(theme.text_muted)),
            ]
        })
        .collect::<Vec<_>>();

        let lines = vec![
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            )),
            Line::from(hint_spans),
        ];

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );
        f.render_widget(widget, area);
    }
}
