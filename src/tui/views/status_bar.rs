//! Status bar view
//!
//! Shows wizard progress, unsaved-change state and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App, InputMode};
use crate::wizard::Step;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let progress = app.wizard.progress_percent();
    let progress_color = if progress == 100 {
        Color::Green
    } else {
        Color::Yellow
    };

    let mut spans = vec![
        Span::styled(
            format!(" Step {}/{} ", app.wizard.current().number(), Step::COUNT),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{}%", progress),
            Style::default()
                .fg(progress_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let name = app.wizard.state().personal.display_name();
    if !name.is_empty() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(name, Style::default().fg(Color::Cyan)));
    }

    if app.dirty {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("unsaved", Style::default().fg(Color::Yellow)));
    }

    let hints = key_hints(app);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize)
        .saturating_sub(left_len + hints.len())
        .max(1);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(app: &App) -> &'static str {
    match (app.input_mode, app.active_view) {
        (InputMode::Editing, _) => " Enter:Save  Esc:Cancel ",
        (InputMode::Filter, _) => " Enter:Apply  Esc:Clear ",
        (InputMode::Normal, ActiveView::Wizard) if app.wizard.current().is_last() => {
            " S:Submit  s:Save  p:Back  o:Offices  ?:Help  q:Quit "
        }
        (InputMode::Normal, ActiveView::Wizard) => {
            " n:Next  p:Back  s:Save  o:Offices  ?:Help  q:Quit "
        }
        (InputMode::Normal, ActiveView::Offices) => {
            " Space:Mark  d:Delete  /:Filter  o:Wizard  q:Quit "
        }
    }
}
