//! Card board widget: renders one card as a 5×5 grid with a B-I-N-G-O
//! header row, marked/free cell styling, and the cell cursor.

use crate::models::{Card, GRID_SIZE};
use crate::tui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Column header letters for the grid.
const LETTERS: [&str; GRID_SIZE] = ["B", "I", "N", "G", "O"];

/// Stateless widget that renders the selected card.
pub struct CardBoard;

impl CardBoard {
    /// Renders the card grid into `area` with the cell cursor at
    /// `selected_cell` (row, col).
    pub fn render(
        f: &mut Frame,
        area: Rect,
        card: &Card,
        selected_cell: (usize, usize),
        theme: &Theme,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", card.name))
            .style(Style::default().fg(theme.primary).bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        // One row for the letters, five for the numbers
        let mut constraints = vec![Constraint::Length(1); GRID_SIZE + 1];
        constraints.push(Constraint::Min(0));
        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let header = Line::from(
            LETTERS
                .iter()
                .map(|letter| {
                    Span::styled(
                        format!("{letter:^6}"),
                        Style::default()
                            .fg(theme.primary)
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect::<Vec<_>>(),
        );
        f.render_widget(Paragraph::new(header), rows[0]);

        for row in 0..GRID_SIZE {
            let spans: Vec<Span> = (0..GRID_SIZE)
                .map(|col| Self::cell_span(card, row, col, selected_cell, theme))
                .collect();
            f.render_widget(Paragraph::new(Line::from(spans)), rows[row + 1]);
        }
    }

    /// Builds the styled span for one cell.
    fn cell_span<'a>(
        card: &Card,
        row: usize,
        col: usize,
        selected_cell: (usize, usize),
        theme: &Theme,
    ) -> Span<'a> {
        let value = card.numbers.cell(row, col);
        let is_free = value.is_free();
        let is_marked = card.marked_cells.is_marked(row, col);
        let is_selected = (row, col) == selected_cell;

        let text = if is_free {
            format!("{:^6}", "F")
        } else {
            format!("{:^6}", value.to_string())
        };

        let mut style = if is_free {
            Style::default()
                .fg(theme.background)
                .bg(theme.free_cell)
                .add_modifier(Modifier::BOLD)
        } else if is_marked {
            Style::default()
                .fg(theme.background)
                .bg(theme.marked)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(theme.background)
        };

        if is_selected {
            style = style.add_modifier(Modifier::REVERSED);
        }

        Span::styled(text, style)
    }
}
