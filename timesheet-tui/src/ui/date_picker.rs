use super::utils::centered_rect;
use super::*;
use crate::app::month_weeks;
use time::Weekday;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

pub fn render_date_picker(frame: &mut Frame, app: &mut App, body: Rect) {
    super::grid_view::render_grid_view(frame, app, body);

    let Some(picker) = app.date_picker else {
        return;
    };
    let names = app.day_names;
    let cursor = picker.cursor;

    let mut header = Vec::new();
    for weekday in WEEKDAYS {
        let short: String = names.short(weekday).chars().take(2).collect();
        header.push(Span::styled(
            format!("{short:>3} "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![Line::from(header)];
    for week in month_weeks(cursor) {
        let spans: Vec<Span> = week
            .iter()
            .map(|day| match day {
                Some(day) => {
                    let mut style = Style::default().fg(Color::White);
                    if app.week.contains(*day) {
                        style = style.fg(Color::Cyan);
                    }
                    if *day == app.today {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    if *day == cursor {
                        style = Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD);
                    }
                    Span::styled(format!("{:>3} ", day.day()), style)
                }
                None => Span::raw("    "),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let title = format!(" {} {} ", names.month(cursor.month()), cursor.year());
    let area = centered_rect(34, 11, frame.area());
    frame.render_widget(Clear, area);

    let calendar = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(calendar, area);
}
