use crate::cart::LineItem;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BANNER_PURPLE, CHILLI_RED, HEADER_TEXT, MUTED_TEXT, PAY_GREEN,
    POPUP_BORDER, SAVINGS_ORANGE,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let screen = app.screen();

    let restaurant = screen.cart.restaurant_name().unwrap_or("Cart");
    frame.render_widget(Header::new().widget(restaurant), header);

    frame.render_widget(Clear, body);
    frame.render_widget(body_widget(app), body);

    frame.render_widget(Footer::new().widget(footer, screen.cart.total()), footer);

    if let Some(link) = &screen.share_link {
        draw_share_popup(frame, body, restaurant, link);
    }
}

fn body_widget(app: &App) -> Paragraph<'static> {
    let screen = app.screen();
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        " ₹67 saved! With One Blck benefits ",
        Style::default().fg(HEADER_TEXT).bg(BANNER_PURPLE),
    )));
    lines.push(Line::from(""));

    for (idx, item) in screen.cart.items().iter().enumerate() {
        let focused = idx == screen.focused;
        lines.extend(item_lines(item, focused));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(" SAVINGS CORNER  ", Style::default().fg(MUTED_TEXT)),
        Span::styled("Save ₹80 on this order", Style::default().fg(SAVINGS_ORANGE)),
        Span::styled("  View all coupons >", Style::default().fg(MUTED_TEXT)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Delivery  ", Style::default().fg(MUTED_TEXT)),
        Span::styled("Express ", Style::default().fg(HEADER_TEXT)),
        Span::styled("₹29 ", Style::default().fg(MUTED_TEXT).add_modifier(Modifier::CROSSED_OUT)),
        Span::styled("FREE", Style::default().fg(PAY_GREEN)),
        Span::styled("  Fastest delivery, directly to you!", Style::default().fg(MUTED_TEXT)),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Payment   ", Style::default().fg(MUTED_TEXT)),
        Span::styled("Credit card •• 3829", Style::default().fg(HEADER_TEXT)),
        Span::styled("  Additional ₹36 cashback", Style::default().fg(PAY_GREEN)),
    ]));

    Paragraph::new(lines)
}

fn item_lines(item: &LineItem, focused: bool) -> Vec<Line<'static>> {
    let mut name_line = Line::from(vec![
        Span::styled(" 🌶 ", Style::default().fg(CHILLI_RED)),
        Span::styled(item.item_name.clone(), Style::default().fg(HEADER_TEXT)),
    ]);
    let mut control_line = Line::from(vec![
        Span::raw("    "),
        Span::styled("[-]", Style::default().fg(PAY_GREEN)),
        Span::styled(format!(" {} ", item.quantity), Style::default().fg(HEADER_TEXT)),
        Span::styled("[+]", Style::default().fg(PAY_GREEN)),
        Span::styled(
            format!("   ₹{} × {} = ₹{}", item.price, item.quantity, item.subtotal()),
            Style::default().fg(MUTED_TEXT),
        ),
    ]);

    if focused {
        let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
        name_line = name_line.style(highlight);
        control_line = control_line.style(highlight);
    }

    vec![name_line, control_line]
}

fn draw_share_popup(frame: &mut Frame<'_>, body: ratatui::layout::Rect, restaurant: &str, link: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Hey, I think you'll like ordering from {}", restaurant),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(link.to_string(), Style::default().fg(MUTED_TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            "c/Enter: Copy  Esc: Dismiss",
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(40);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled("Share", Style::default().fg(SAVINGS_ORANGE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
