use super::widgets::render_controls;
use super::*;

/// Fuzzy-searchable list shared by the case and activity type pickers.
pub fn render_selection(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // List
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let search_text = if app.search_input.value.is_empty() {
        if app.selection_list_focused {
            "Type to search...".to_string()
        } else {
            "█".to_string()
        }
    } else if app.selection_list_focused {
        app.search_input.value.clone()
    } else {
        let (before, after) = app.search_input.split_at_cursor();
        format!("{}█{}", before, after)
    };
    let search_border = if app.selection_list_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_border)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, chunks[0]);

    let items: Vec<ListItem> = app
        .filtered_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.filtered_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(item.label.clone()).style(style)
        })
        .collect();

    let noun = match app.current_view {
        View::SelectActivityType => "Activity types",
        _ => "Cases",
    };
    // Show count: filtered / total
    let title = if app.search_input.value.is_empty() {
        format!(" {} ({}) ", noun, app.selection_items.len())
    } else {
        format!(
            " {} ({}/{}) ",
            noun,
            app.filtered_items.len(),
            app.selection_items.len()
        )
    };

    let list_border = if app.selection_list_focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(list_border)
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, chunks[1]);

    render_controls(frame, chunks[2], app);
}
