use crate::ui::theme::{HEADER_PURPLE, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, restaurant: &str) -> Paragraph<'static> {
        let bg = Style::default().bg(HEADER_PURPLE);
        let text_style = bg.fg(HEADER_TEXT);
        let muted_style = bg.fg(MUTED_TEXT);
        let line = Line::from(vec![
            Span::styled("  ← ", text_style),
            Span::styled(restaurant.to_string(), text_style),
            Span::styled("   Flat | 402, Hy End Homes ▾", muted_style),
        ]);

        Paragraph::new(line).style(bg).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(bg),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
