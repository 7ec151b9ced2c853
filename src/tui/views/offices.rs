//! Office table view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::models::{Office, OfficeStatus};
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let page = app.office_page();
    let size = app.settings.office_page_size.max(1);

    let header = Row::new(vec![
        "", "Code", "Office", "Manager", "Location", "Occupancy", "Rent", "Status",
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = page
        .items
        .iter()
        .map(|office| office_row(office, app.marked_offices.contains(&office.id)))
        .collect();

    let marked = if app.marked_offices.is_empty() {
        String::new()
    } else {
        format!(", {} marked", app.marked_offices.len())
    };

    let block = Block::default()
        .title(format!(" Offices ({}{}) ", page.total, marked))
        .title_bottom(Line::from(format!(
            " Page {} of {} ",
            page.page_index + 1,
            page.page_count
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Min(18),
            Constraint::Length(18),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Length(9),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let selected = (!page.items.is_empty()).then_some(app.selected_office % size);
    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}

fn office_row(office: &Office, marked: bool) -> Row<'static> {
    let style = if marked {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from(if marked { "*" } else { " " }),
        Cell::from(office.office_code.clone()),
        Cell::from(office.office_name.clone()),
        Cell::from(office.manager.full_name()),
        Cell::from(office.location.to_string()),
        Cell::from(office.occupancy()),
        Cell::from(office.formatted_rent()),
        Cell::from(office.status.label()).style(Style::default().fg(status_color(office.status))),
    ])
    .style(style)
}

fn status_color(status: OfficeStatus) -> Color {
    match status {
        OfficeStatus::Active => Color::Green,
        OfficeStatus::UnderRenovation => Color::Yellow,
        OfficeStatus::Closed => Color::Red,
    }
}
