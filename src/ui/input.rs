use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // The share surface grabs all input while open.
    if app.screen().share_open() {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Enter => app.copy_share_link(),
            KeyCode::Esc => app.dismiss_share(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_focus_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_focus_down(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.change_focused_quantity(1),
        KeyCode::Char('-') | KeyCode::Char('_') => app.change_focused_quantity(-1),
        KeyCode::Char('s') | KeyCode::Char('S') => app.generate_share_link(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
