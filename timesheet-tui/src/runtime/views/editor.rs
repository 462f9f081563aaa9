use crate::app::{App, EditorField, SelectionTarget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_editor_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let on_description = app.editor_field == EditorField::Description;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => enqueue_action(action_tx, Action::SaveEditor),
            KeyCode::Char('d') => app.enter_delete_confirm(),
            KeyCode::Char('x') if on_description => app.editor_input_clear(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.close_editor();
            app.set_status("Changes discarded".to_string());
        }
        KeyCode::Delete => app.enter_delete_confirm(),
        KeyCode::Tab | KeyCode::Down => app.editor_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.editor_previous_field(),
        KeyCode::Left => app.editor_step(false),
        KeyCode::Right => app.editor_step(true),
        KeyCode::Enter => match app.editor_field {
            EditorField::Case => app.open_case_selection(SelectionTarget::Editor),
            EditorField::ActivityType => {
                app.open_activity_type_selection(SelectionTarget::Editor)
            }
            EditorField::Billable | EditorField::Billed => app.editor_toggle(),
            _ => app.editor_next_field(),
        },
        KeyCode::Backspace if on_description => app.editor_input_backspace(),
        KeyCode::Home if on_description => app.editor_description.home(),
        KeyCode::End if on_description => app.editor_description.end(),
        KeyCode::Char(c) if on_description => app.editor_input_char(c),
        KeyCode::Char('+') | KeyCode::Char('l') => app.editor_step(true),
        KeyCode::Char('-') | KeyCode::Char('h') => app.editor_step(false),
        KeyCode::Char(' ') => app.editor_toggle(),
        KeyCode::Char('j') => app.editor_next_field(),
        KeyCode::Char('k') => app.editor_previous_field(),
        _ => {}
    }
}
