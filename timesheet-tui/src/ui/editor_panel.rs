use super::widgets::{border_style, checkbox, with_cursor};
use super::*;
use crate::app::{EditorField, FocusedArea};

pub fn render_editor_panel(frame: &mut Frame, area: Rect, app: &App) {
    let Some(draft) = app.editor.draft() else {
        return;
    };
    let focused = app.focused_area == FocusedArea::Editor;
    let names = app.day_names;

    let description = if focused && app.editor_field == EditorField::Description {
        let (before, after) = app.editor_description.split_at_cursor();
        with_cursor(before, after)
    } else if draft.description.is_empty() {
        "…".to_string()
    } else {
        draft.description.clone()
    };
    let activity_type = if draft.activity_type.is_empty() {
        "[None]".to_string()
    } else {
        draft.activity_type.clone()
    };

    let fields = [
        (EditorField::Case, app.reference.case_label(&draft.case_id)),
        (
            EditorField::Day,
            format!(
                "{} {} {}",
                names.long(draft.day.weekday()),
                draft.day.day(),
                names.month(draft.day.month())
            ),
        ),
        (EditorField::ActivityType, activity_type),
        (EditorField::Description, description),
        (EditorField::Hours, format!("{} h", draft.hours)),
        (EditorField::Billable, checkbox(draft.billable).to_string()),
        (EditorField::Billed, checkbox(draft.billed).to_string()),
    ];

    let mut lines = vec![Line::from("")];
    for (field, value) in fields {
        let active = focused && app.editor_field == field;
        let label_style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let value_style = if active {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if active { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field.label()),
            label_style,
        )));
        lines.push(Line::from(Span::styled(format!("  {value}"), value_style)));
        lines.push(Line::from(""));
    }

    if let Some(id) = app.editor.editing_id() {
        lines.push(Line::from(Span::styled(
            format!("  #{id}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines)
        .wrap(ratatui::widgets::Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused))
                .title(format!(" {} ", app.editor.mode_label()))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(panel, area);
}
