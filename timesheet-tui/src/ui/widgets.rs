use crate::app::{App, EditorField, FocusedArea, QuickAddField, View};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use timesheet::DayStatus;

pub fn day_status_color(status: DayStatus) -> Color {
    match status {
        DayStatus::Under => Color::Red,
        DayStatus::Exact => Color::Green,
        DayStatus::Over => Color::Rgb(255, 165, 0),
    }
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Text with a block cursor at the input's cursor position.
pub fn with_cursor(before: &str, after: &str) -> String {
    format!("{before}█{after}")
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    }
}

fn is_error_status(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("error")
        || lower.contains("cannot")
        || lower.contains("nothing to delete")
        || lower.contains("cancelled")
        || lower.contains("discarded")
}

fn is_success_status(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("created")
        || lower.contains("updated")
        || lower.contains("deleted")
        || lower.contains("added")
        || lower.contains("submitted")
        || lower.contains("selected")
}

pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let contextual_status = app.get_contextual_status();
    let status_text = app.status_message.as_deref().unwrap_or(&contextual_status);

    let color = if is_error_status(status_text) {
        Color::Red
    } else if is_success_status(status_text) {
        Color::Green
    } else {
        Color::White
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(color))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(status, area);
}

fn hint(spans: &mut Vec<Span<'static>>, key: &'static str, action: &'static str) {
    if !spans.is_empty() {
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(format!(": {action}")));
}

/// Key hints for whatever currently has focus.
pub fn control_hints(app: &App) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    match (app.current_view, app.focused_area) {
        (View::Grid, FocusedArea::Grid) => {
            hint(&mut spans, "↑↓←→/hjkl", "Move");
            hint(&mut spans, "Enter", "Open");
            hint(&mut spans, "d", "Delete");
            hint(&mut spans, "[/]", "Week");
            hint(&mut spans, "t", "Today");
            hint(&mut spans, "g", "Go to date");
            hint(&mut spans, "Tab", "Quick add");
            hint(&mut spans, "Ctrl+W", "Submit week");
            hint(&mut spans, "q", "Quit");
        }
        (View::Grid, FocusedArea::QuickAdd) => {
            hint(&mut spans, "Tab", "Next field");
            match app.quick_add_field {
                QuickAddField::Day | QuickAddField::Hours => hint(&mut spans, "←→/-+", "Change"),
                QuickAddField::Case | QuickAddField::ActivityType => {
                    hint(&mut spans, "Enter", "Choose")
                }
                QuickAddField::Description => hint(&mut spans, "Type", "Edit"),
                QuickAddField::Billed => hint(&mut spans, "Space", "Toggle"),
            }
            hint(&mut spans, "Ctrl+A", "Add");
            hint(&mut spans, "Esc", "Back to grid");
        }
        (View::Grid, FocusedArea::Editor) => {
            hint(&mut spans, "Tab/↑↓", "Field");
            match app.editor_field {
                EditorField::Day | EditorField::Hours => hint(&mut spans, "←→/-+", "Change"),
                EditorField::Case | EditorField::ActivityType => {
                    hint(&mut spans, "Enter", "Choose")
                }
                EditorField::Description => hint(&mut spans, "Type", "Edit"),
                EditorField::Billable | EditorField::Billed => hint(&mut spans, "Space", "Toggle"),
            }
            hint(&mut spans, "Ctrl+S", "Save");
            hint(&mut spans, "Ctrl+D", "Delete");
            hint(&mut spans, "Esc", "Close");
        }
        (View::SelectCase | View::SelectActivityType, _) => {
            hint(&mut spans, "Type", "Filter");
            hint(&mut spans, "Tab", "Focus list");
            hint(&mut spans, "↑↓/j/k", "Navigate");
            hint(&mut spans, "Enter", "Select");
            hint(&mut spans, "Ctrl+X", "Clear");
            hint(&mut spans, "Esc", "Cancel");
        }
        (View::ConfirmDelete, _) => {
            hint(&mut spans, "y", "Delete");
            hint(&mut spans, "n/Esc", "Keep");
        }
        (View::DatePicker, _) => {
            hint(&mut spans, "←→↑↓", "Day/week");
            hint(&mut spans, "[/]", "Month");
            hint(&mut spans, "t", "Today");
            hint(&mut spans, "Enter", "Go");
            hint(&mut spans, "Esc", "Cancel");
        }
    }
    spans
}

pub fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let controls = Paragraph::new(Line::from(control_hints(app)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;

    #[test]
    fn status_colouring_by_message() {
        assert!(is_error_status("Cannot add: select a case before adding"));
        assert!(is_error_status("Error: activity 3 no longer exists"));
        assert!(is_success_status("Week 10 submitted: 4 entries, 8.50 hours"));
        assert!(!is_success_status("Showing week 11 (MARCH 10, 2025)"));
    }

    #[test]
    fn editor_hints_follow_field() {
        let mut app = test_app();
        app.open_editor_at_cursor();
        app.editor_field = EditorField::Billed;

        let text: String = control_hints(&app)
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert!(text.contains("Space: Toggle"));
        assert!(text.contains("Ctrl+S: Save"));
    }
}
