use crate::app::{App, FocusedArea};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::{editor, enqueue_action, quick_add};

pub(super) fn handle_grid_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => {
                app.quit();
                return;
            }
            KeyCode::Char('a') => {
                enqueue_action(action_tx, Action::AddQuickEntry);
                return;
            }
            KeyCode::Char('w') => {
                enqueue_action(action_tx, Action::SubmitWeek);
                return;
            }
            _ => {}
        }
    }

    match app.focused_area {
        FocusedArea::Editor => editor::handle_editor_key(key, app, action_tx),
        FocusedArea::QuickAdd => quick_add::handle_quick_add_key(key, app, action_tx),
        FocusedArea::Grid => handle_grid_key(key, app),
    }
}

fn handle_grid_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor_left(),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor_right(),
        KeyCode::Enter => app.open_editor_at_cursor(),
        KeyCode::Char('[') | KeyCode::Char('p') => app.previous_week(),
        KeyCode::Char(']') | KeyCode::Char('n') => app.next_week(),
        KeyCode::Char('t') => app.jump_to_today(),
        KeyCode::Char('g') => app.open_date_picker(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_at_cursor(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('a') => app.toggle_focus_area(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::app::View;
    use time::macros::date;

    use super::super::super::action_queue::channel;
    use super::super::test_keys::{ctrl, key};

    fn press(app: &mut App, event: KeyEvent) -> Option<Action> {
        let (tx, mut rx) = channel();
        handle_grid_view_key(event, app, &tx);
        rx.try_recv().ok()
    }

    #[test]
    fn bracket_keys_move_between_weeks() {
        let mut app = test_app();
        press(&mut app, key(KeyCode::Char(']')));
        press(&mut app, key(KeyCode::Char(']')));
        assert_eq!(app.week.start(), date!(2025 - 03 - 17));

        press(&mut app, key(KeyCode::Char('p')));
        assert_eq!(app.week.start(), date!(2025 - 03 - 10));

        press(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.week.start(), date!(2025 - 03 - 03));
    }

    #[test]
    fn enter_opens_editor_sheet() {
        let mut app = test_app();
        press(&mut app, key(KeyCode::Enter));
        assert!(app.editor.is_open());
        assert_eq!(app.focused_area, FocusedArea::Editor);
    }

    #[test]
    fn ctrl_a_queues_quick_add_from_any_area() {
        let mut app = test_app();
        assert_eq!(press(&mut app, ctrl('a')), Some(Action::AddQuickEntry));

        app.focused_area = FocusedArea::QuickAdd;
        assert_eq!(press(&mut app, ctrl('a')), Some(Action::AddQuickEntry));
    }

    #[test]
    fn ctrl_w_queues_week_submission() {
        let mut app = test_app();
        assert_eq!(press(&mut app, ctrl('w')), Some(Action::SubmitWeek));
    }

    #[test]
    fn g_opens_date_picker() {
        let mut app = test_app();
        press(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.current_view, View::DatePicker);
    }

    #[test]
    fn q_quits() {
        let mut app = test_app();
        press(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }
}
