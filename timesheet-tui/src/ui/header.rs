use super::*;

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let names = app.day_names;
    let end = app.week.end();
    let range = format!(
        "{} – {} {}, {}",
        app.week.heading(names),
        names.month(end.month()),
        end.day(),
        end.year()
    );

    let line = Line::from(vec![
        Span::styled("◀ [ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            range,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ] ▶", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("   Week {}", app.week.iso_week()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("   {:.2} h", app.grid.week_total()),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Timesheet "),
    );
    frame.render_widget(header, area);
}
