use crate::app::{App, View};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod confirm_delete;
mod date_picker;
mod editor;
mod grid;
mod quick_add;
mod selection;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        View::Grid => grid::handle_grid_view_key(key, app, action_tx),
        View::SelectCase | View::SelectActivityType => selection::handle_selection_key(key, app),
        View::ConfirmDelete => confirm_delete::handle_confirm_delete_key(key, app, action_tx),
        View::DatePicker => date_picker::handle_date_picker_key(key, app),
    }
}
