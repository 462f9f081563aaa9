use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_date_picker_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.date_picker_move(-1),
        KeyCode::Right | KeyCode::Char('l') => app.date_picker_move(1),
        KeyCode::Up | KeyCode::Char('k') => app.date_picker_move(-7),
        KeyCode::Down | KeyCode::Char('j') => app.date_picker_move(7),
        KeyCode::PageUp | KeyCode::Char('[') => app.date_picker_shift_month(false),
        KeyCode::PageDown | KeyCode::Char(']') => app.date_picker_shift_month(true),
        KeyCode::Char('t') => app.date_picker_today(),
        KeyCode::Enter => app.confirm_date_picker(),
        KeyCode::Esc | KeyCode::Char('q') => app.cancel_date_picker(),
        _ => {}
    }
}
