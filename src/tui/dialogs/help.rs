//! Help dialog
//!
//! Shows the keyboard shortcuts for the active view

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        key_line("q", "Quit (unsaved answers are saved)"),
        key_line("?", "Show/hide help"),
        key_line("o/Tab", "Switch between wizard and offices"),
        key_line("j/k", "Move selection down/up"),
        Line::from(""),
    ];

    match view {
        ActiveView::Wizard => {
            lines.push(heading("Registration Wizard"));
            lines.push(key_line("Enter", "Edit field (toggles yes/no fields)"));
            lines.push(key_line("Left/Right", "Cycle suggested values"));
            lines.push(key_line("Space", "Toggle yes/no field"));
            lines.push(key_line("n/p", "Next/previous step"));
            lines.push(key_line("1-5", "Jump to a reachable step"));
            lines.push(key_line("a", "Add degree (Academic step)"));
            lines.push(key_line("x", "Remove selected degree"));
            lines.push(key_line("s", "Save draft"));
            lines.push(key_line("S", "Submit (final step)"));
        }
        ActiveView::Offices => {
            lines.push(heading("Office Table"));
            lines.push(key_line("Space", "Mark/unmark office"));
            lines.push(key_line("d", "Delete marked (or current) offices"));
            lines.push(key_line("/", "Filter"));
            lines.push(key_line("Esc", "Clear filter"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
