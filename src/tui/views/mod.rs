//! TUI Views module
//!
//! The stepper, the wizard form, the office table and the status bar.

pub mod form;
pub mod offices;
pub mod status_bar;
pub mod stepper;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveView, App, InputMode};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::{InputLine, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    stepper::render(frame, app, layout.stepper);

    match app.active_view {
        ActiveView::Wizard => form::render(frame, app, layout.main),
        ActiveView::Offices => offices::render(frame, app, layout.main),
    }

    render_input_line(frame, app, layout.input);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(50, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    if app.show_help {
        dialogs::help::render(frame, app);
    }
}

fn render_input_line(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    match app.input_mode {
        InputMode::Editing => {
            let label = app
                .selected_form_row()
                .map(|row| row.label(app.wizard.state()))
                .unwrap_or_default();
            frame.render_widget(InputLine::new(&app.input, &label), area);
        }
        InputMode::Filter => {
            frame.render_widget(InputLine::new(&app.office_filter, "Filter"), area);
        }
        InputMode::Normal if app.active_view == ActiveView::Offices && !app.office_filter.is_empty() => {
            let line = Line::from(vec![
                Span::styled("Filter: ", Style::default().fg(Color::Cyan)),
                Span::raw(app.office_filter.value().to_string()),
                Span::styled("  (Esc clears)", Style::default().fg(Color::DarkGray)),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
        InputMode::Normal => {}
    }
}
