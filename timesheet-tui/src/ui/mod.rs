use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
    Frame,
};

mod date_picker;
mod delete_dialog;
mod editor_panel;
mod grid_view;
mod header;
mod quick_add_bar;
mod selection_views;
pub(super) mod utils;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(frame.area());

    header::render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Grid => grid_view::render_grid_view(frame, app, body),
        View::SelectCase | View::SelectActivityType => {
            selection_views::render_selection(frame, app, body)
        }
        View::ConfirmDelete => delete_dialog::render_delete_confirm_dialog(frame, app, body),
        View::DatePicker => date_picker::render_date_picker(frame, app, body),
    }
}
