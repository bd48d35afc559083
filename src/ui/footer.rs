use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, PAY_GREEN};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Bottom bar: key hints on the left, payment call-to-action on the right.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, total: u64) -> Paragraph<'static> {
        let hints = " ↑/↓: Select │ +/-: Quantity │ s: Share │ q: Quit";
        let pay = format!(" Pay ₹{} ", total);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let pay_width = pay.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(pay_width);

        let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let pay_style = Style::default()
            .fg(HEADER_TEXT)
            .bg(PAY_GREEN)
            .add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::styled(hints, hint_style),
            Span::styled(" ".repeat(padding), hint_style),
            Span::styled(pay, pay_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
