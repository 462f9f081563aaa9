use crate::app::{App, FocusedArea, QuickAddField, SelectionTarget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_quick_add_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let on_description = app.quick_add_field == QuickAddField::Description;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('x') && on_description {
            app.quick_add_input_clear();
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Down => app.focused_area = FocusedArea::Grid,
        KeyCode::Tab => app.quick_add_next_field(),
        KeyCode::BackTab => app.quick_add_previous_field(),
        KeyCode::Left => app.quick_add_step(false),
        KeyCode::Right => app.quick_add_step(true),
        KeyCode::Enter => match app.quick_add_field {
            QuickAddField::Case => app.open_case_selection(SelectionTarget::QuickAdd),
            QuickAddField::ActivityType => {
                app.open_activity_type_selection(SelectionTarget::QuickAdd)
            }
            _ => enqueue_action(action_tx, Action::AddQuickEntry),
        },
        KeyCode::Backspace if on_description => app.quick_add_input_backspace(),
        KeyCode::Home if on_description => app.quick_add_description.home(),
        KeyCode::End if on_description => app.quick_add_description.end(),
        KeyCode::Char(c) if on_description => app.quick_add_input_char(c),
        KeyCode::Char('+') | KeyCode::Char('l') => app.quick_add_step(true),
        KeyCode::Char('-') | KeyCode::Char('h') => app.quick_add_step(false),
        KeyCode::Char(' ') if app.quick_add_field == QuickAddField::Billed => {
            app.quick_add.toggle_billed()
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::app::View;

    use super::super::super::action_queue::channel;
    use super::super::test_keys::key;

    fn quick_add_app() -> App {
        let mut app = test_app();
        app.focused_area = FocusedArea::QuickAdd;
        app
    }

    fn press(app: &mut App, event: KeyEvent) -> Option<Action> {
        let (tx, mut rx) = channel();
        handle_quick_add_key(event, app, &tx);
        rx.try_recv().ok()
    }

    #[test]
    fn arrows_cycle_the_day() {
        let mut app = quick_add_app();
        press(&mut app, key(KeyCode::Right));
        press(&mut app, key(KeyCode::Right));
        assert_eq!(app.quick_add.weekday_index, 4);
    }

    #[test]
    fn enter_on_case_opens_case_list() {
        let mut app = quick_add_app();
        press(&mut app, key(KeyCode::Tab));
        assert!(press(&mut app, key(KeyCode::Enter)).is_none());
        assert_eq!(app.current_view, View::SelectCase);
        assert_eq!(app.selection_target, SelectionTarget::QuickAdd);
    }

    #[test]
    fn enter_on_hours_queues_add() {
        let mut app = quick_add_app();
        app.quick_add_field = QuickAddField::Hours;
        press(&mut app, key(KeyCode::Char('+')));
        assert_eq!(app.quick_add.hours.as_f64(), 0.5);

        assert_eq!(
            press(&mut app, key(KeyCode::Enter)),
            Some(Action::AddQuickEntry)
        );
    }

    #[test]
    fn esc_returns_focus_to_grid() {
        let mut app = quick_add_app();
        press(&mut app, key(KeyCode::Esc));
        assert_eq!(app.focused_area, FocusedArea::Grid);
    }

    #[test]
    fn typing_fills_description() {
        let mut app = quick_add_app();
        app.quick_add_field = QuickAddField::Description;
        for c in "Reise".chars() {
            press(&mut app, key(KeyCode::Char(c)));
        }
        press(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.quick_add.description, "Reis");
    }
}
