//! Step indicator across the top of the screen

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::StepMarker;
use crate::tui::app::App;
use crate::wizard::Step;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    for step in Step::all() {
        let marker = StepMarker::for_step(&app.wizard, step);
        if step.index() > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}] {} {}", marker.symbol(), step.number(), step.title()),
            marker_style(marker),
        ));
    }

    let block = Block::default()
        .title(" Study Global Registration ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn marker_style(marker: StepMarker) -> Style {
    match marker {
        StepMarker::Current => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        StepMarker::Completed => Style::default().fg(Color::Green),
        StepMarker::Accessible => Style::default().fg(Color::White),
        StepMarker::Locked => Style::default().fg(Color::DarkGray),
    }
}
