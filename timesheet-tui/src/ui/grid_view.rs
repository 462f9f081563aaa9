use super::widgets::{border_style, day_status_color, render_controls, render_status};
use super::*;
use crate::app::FocusedArea;
use ratatui::widgets::{Cell, Row, Table};
use timesheet::{Activity, GridCell, GridRow, RowKind, Week};

const LABEL_WIDTH: u16 = 30;
const EDITOR_WIDTH: u16 = 46;
/// Day header, expected, actual and divider rows above the case rows.
const SUMMARY_ROWS: u16 = 4;
const DESCRIPTION_WIDTH: usize = 12;

pub fn render_grid_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Quick add
            Constraint::Min(0),    // Grid + editor sheet
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(body);

    quick_add_bar::render_quick_add(frame, chunks[0], app);

    if app.editor.is_open() {
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(EDITOR_WIDTH)])
            .split(chunks[1]);
        render_grid(frame, main[0], app);
        editor_panel::render_editor_panel(frame, main[1], app);
    } else {
        render_grid(frame, chunks[1], app);
    }

    render_status(frame, chunks[2], app);
    render_controls(frame, chunks[3], app);
}

fn render_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app.focused_area == FocusedArea::Grid))
        .title(" Hours ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.grid_view_height = inner.height.saturating_sub(SUMMARY_ROWS) as usize;
    app.ensure_cursor_visible();
    let app: &App = app;

    let mut rows = vec![
        expected_row(app),
        actual_row(app),
        Row::new(
            std::iter::repeat_n("─".repeat(64), Week::DAYS + 1).map(Cell::from),
        )
        .style(Style::default().fg(Color::DarkGray)),
    ];

    let editing_id = app.editor.editing_id();
    let grid_focused = app.focused_area == FocusedArea::Grid;
    rows.extend(
        app.grid
            .rows
            .iter()
            .enumerate()
            .skip(app.grid_scroll)
            .take(app.grid_view_height)
            .map(|(row_index, row)| {
                let cursor_col = (grid_focused && row_index == app.cursor_row)
                    .then_some(app.cursor_col);
                case_row(app, row, cursor_col, editing_id)
            }),
    );

    let widths = std::iter::once(Constraint::Length(LABEL_WIDTH))
        .chain(std::iter::repeat_n(Constraint::Fill(1), Week::DAYS));

    let table = Table::new(rows, widths)
        .header(day_header_row(app))
        .column_spacing(1);
    frame.render_widget(table, inner);
}

fn day_header_row(app: &App) -> Row<'static> {
    let mut cells = vec![Cell::from("")];
    for day in app.week.days(app.day_names) {
        let style = if day.date == app.today {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        cells.push(Cell::from(format!("{} {}", day.short_name, day.day_of_month)).style(style));
    }
    Row::new(cells)
}

fn expected_row(app: &App) -> Row<'static> {
    let mut cells = vec![Cell::from(app.day_names.expected_label())];
    cells.extend(
        app.grid
            .expected
            .iter()
            .map(|hours| Cell::from(format!("{hours:.2}"))),
    );
    Row::new(cells).style(Style::default().fg(Color::DarkGray))
}

fn actual_row(app: &App) -> Row<'static> {
    let mut cells = vec![Cell::from(app.day_names.actual_label())];
    cells.extend(app.grid.actual.iter().map(|total| {
        Cell::from(format!("{:.2}", total.hours))
            .style(Style::default().fg(day_status_color(total.status)))
    }));
    Row::new(cells).style(Style::default().add_modifier(Modifier::BOLD))
}

/// Hours, billed mark and the start of the description.
fn entry_text(activity: &Activity) -> String {
    let mark = if activity.billed { " ✓" } else { "" };
    if activity.description.is_empty() {
        format!("{}{mark}", activity.hours)
    } else {
        format!(
            "{}{mark} {}",
            activity.hours,
            utils::truncate(&activity.description, DESCRIPTION_WIDTH)
        )
    }
}

fn case_row(
    app: &App,
    row: &GridRow,
    cursor_col: Option<usize>,
    editing_id: Option<timesheet::ActivityId>,
) -> Row<'static> {
    let label = match row.kind {
        RowKind::Primary => Cell::from(utils::truncate(
            &app.reference.case_label(&row.case_id),
            LABEL_WIDTH as usize,
        ))
        .style(Style::default().fg(Color::Cyan)),
        RowKind::Extra => Cell::from(format!("  ↳ {}", row.case_id))
            .style(Style::default().fg(Color::DarkGray)),
    };

    let mut cells = vec![label];
    for (col, cell) in row.cells.iter().enumerate() {
        let (text, mut style) = match cell {
            GridCell::Entry(activity) => {
                let color = if activity.billable {
                    Color::Green
                } else {
                    Color::Yellow
                };
                let mut style = Style::default().fg(color);
                if editing_id == Some(activity.id) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                (entry_text(activity), style)
            }
            GridCell::Empty { .. } => ("·".to_string(), Style::default().fg(Color::DarkGray)),
            GridCell::Blank => (String::new(), Style::default()),
        };
        if cursor_col == Some(col) {
            style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
        }
        cells.push(Cell::from(text).style(style));
    }
    Row::new(cells)
}
