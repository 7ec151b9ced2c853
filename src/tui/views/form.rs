//! Form for the current wizard step
//!
//! One row per field. The test scores step shows the IELTS overall band
//! underneath, recomputed from the four bands on every frame.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{FieldKind, Section};
use crate::tui::app::{App, FormRow};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.wizard.current();
    let state = app.wizard.state();

    let block = Block::default()
        .title(format!(" {}: {} ", step.title(), step.description()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let rows: Vec<Row> = app
        .form_rows()
        .into_iter()
        .map(|row| {
            let value = row.value(state);
            let shown = if value.is_empty() {
                Span::styled("-", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(value)
            };
            Row::new(vec![
                Cell::from(Span::styled(row.label(state), label_style(row))),
                Cell::from(shown),
                Cell::from(Span::styled(hint(row), Style::default().fg(Color::DarkGray))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(32),
            Constraint::Min(20),
            Constraint::Length(14),
        ],
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(app.selected_row));

    if step.section() == Section::TestScores {
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        frame.render_stateful_widget(table, chunks[0], &mut table_state);
        frame.render_widget(Paragraph::new(ielts_line(app)), chunks[1]);
    } else {
        frame.render_stateful_widget(table.block(block), area, &mut table_state);
    }
}

fn label_style(row: FormRow) -> Style {
    match row {
        FormRow::Field(_) => Style::default().fg(Color::White),
        FormRow::Degree(_, _) => Style::default().fg(Color::Magenta),
    }
}

fn hint(row: FormRow) -> &'static str {
    match row {
        FormRow::Field(field) if field.choices().is_some() => "<- choices ->",
        FormRow::Field(field) if field.kind() == FieldKind::Flag => "space toggles",
        _ => "",
    }
}

fn ielts_line(app: &App) -> Line<'static> {
    let value = match app.wizard.ielts_overall() {
        Some(band) => Span::styled(
            format!("{:.1}", band),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            "pending (all four bands needed)",
            Style::default().fg(Color::DarkGray),
        ),
    };
    Line::from(vec![
        Span::styled("  IELTS Overall: ", Style::default().fg(Color::Yellow)),
        value,
    ])
}
