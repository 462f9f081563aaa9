use super::widgets::{border_style, checkbox, with_cursor};
use super::*;
use crate::app::{FocusedArea, QuickAddField};

pub fn render_quick_add(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focused_area == FocusedArea::QuickAdd;
    let form = &app.quick_add;
    let names = app.day_names;
    let day = form.day_in(&app.week);

    let case = form
        .case_id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "[None]".to_string());
    let activity_type = form
        .activity_type
        .clone()
        .unwrap_or_else(|| "[None]".to_string());
    let description = if focused && app.quick_add_field == QuickAddField::Description {
        let (before, after) = app.quick_add_description.split_at_cursor();
        with_cursor(before, after)
    } else if form.description.is_empty() {
        "…".to_string()
    } else {
        utils::truncate(&form.description, 24)
    };

    let fields = [
        (
            QuickAddField::Day,
            "Day",
            format!("{} {}", names.short(day.weekday()), day.day()),
        ),
        (QuickAddField::Case, "Case", case),
        (QuickAddField::ActivityType, "Type", activity_type),
        (QuickAddField::Description, "Note", description),
        (QuickAddField::Hours, "Hours", form.hours.to_string()),
        (
            QuickAddField::Billed,
            "Billed",
            checkbox(form.billed).to_string(),
        ),
    ];

    let mut spans = Vec::new();
    for (field, label, value) in fields {
        let active = focused && app.quick_add_field == field;
        let value_style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!("{label}: "),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(value, value_style));
        spans.push(Span::raw("   "));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(" Quick add (Ctrl+A) ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(bar, area);
}
