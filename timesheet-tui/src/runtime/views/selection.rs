use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys for the case and activity type lists. Typing filters the list;
/// Tab moves focus into the list where j/k navigate.
pub(super) fn handle_selection_key(key: KeyEvent, app: &mut App) {
    if handle_selection_input_key(key, app) {
        return;
    }

    match key.code {
        KeyCode::Enter => app.confirm_selection(),
        KeyCode::Esc => app.cancel_selection(),
        _ => {}
    }
}

fn handle_selection_input_key(key: KeyEvent, app: &mut App) -> bool {
    let list_index = app.filtered_index;
    let list_len = app.filtered_items.len();

    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_clear();
            true
        }
        KeyCode::Tab => {
            app.selection_list_focused = true;
            true
        }
        KeyCode::BackTab => {
            app.selection_list_focused = false;
            true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.selection_list_focused && c == 'j' {
                if list_index + 1 >= list_len {
                    app.selection_list_focused = false;
                } else {
                    app.select_next();
                }
            } else if app.selection_list_focused && c == 'k' {
                if list_index == 0 {
                    app.selection_list_focused = false;
                } else {
                    app.select_previous();
                }
            } else if !app.selection_list_focused {
                app.search_input_char(c);
            }
            true
        }
        KeyCode::Backspace => {
            app.search_input_backspace();
            true
        }
        KeyCode::Up => {
            app.select_previous();
            true
        }
        KeyCode::Down => {
            app.select_next();
            true
        }
        KeyCode::Left | KeyCode::Right if !app.selection_list_focused => {
            app.search_move_cursor(key.code == KeyCode::Left);
            true
        }
        KeyCode::Home | KeyCode::End if !app.selection_list_focused => {
            app.search_cursor_home_end(key.code == KeyCode::Home);
            true
        }
        _ => false,
    }
}
