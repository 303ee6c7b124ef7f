//! Card list widget: the sidebar listing all cards with the current
//! selection highlighted.

use crate::models::Card;
use crate::tui::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Stateless widget that renders the card sidebar.
pub struct CardList;

impl CardList {
    /// Renders the card list into `area` with `selected` highlighted.
    pub fn render(f: &mut Frame, area: Rect, cards: &[Card], selected: usize, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Cards ({}) ", cards.len()))
            .style(Style::default().fg(theme.primary).bg(theme.background));

        let items: Vec<ListItem> = cards
            .iter()
            .map(|card| {
                let marked = card
                    .marked_cells
                    .0
                    .iter()
                    .flatten()
                    .filter(|m| **m)
                    .count();
                ListItem::new(Line::from(format!("{} ({marked}/24)", card.name)))
                    .style(Style::default().fg(theme.text))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(theme.accent)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default();
        if !cards.is_empty() {
            state.select(Some(selected.min(cards.len() - 1)));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}
