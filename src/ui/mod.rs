//! UI module for rendering the TUI

pub mod components;
mod forms;
pub mod layout;

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::SubmissionPhase;
use components::dialog::render_error_dialog;
use layout::FormLayout;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = FormLayout::new(frame.area());

    if app.form.has_succeeded() {
        forms::draw_success(frame, &layout, app);
    } else {
        forms::draw_service_form(frame, &layout, app);
    }

    draw_status_bar(frame, &layout, app);

    if let Some(message) = app.form.submit_error() {
        render_error_dialog(frame, message);
    }
}

fn draw_status_bar(frame: &mut Frame, layout: &FormLayout, app: &App) {
    let (text, color) = if let Some(status) = &app.state.status {
        (status.text.clone(), Color::Yellow)
    } else {
        match app.form.phase() {
            SubmissionPhase::Submitting => ("Submitting service record…".to_string(), Color::Cyan),
            SubmissionPhase::EditingWithErrors => {
                let labels: Vec<_> = app.form.errors().fields().map(|f| f.label()).collect();
                (format!("Needs attention: {}", labels.join(", ")), Color::Red)
            }
            SubmissionPhase::Succeeded => (
                "Enter/n: new record | q: quit".to_string(),
                Color::DarkGray,
            ),
            SubmissionPhase::Editing | SubmissionPhase::TransportError => (
                format!("Tab: next field | {SUBMIT_SHORTCUT}: submit | Ctrl+C: quit"),
                Color::DarkGray,
            ),
        }
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color)))),
        layout.status_bar,
    );
}
