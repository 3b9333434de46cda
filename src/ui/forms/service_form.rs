//! Service record form rendering

use super::field_renderer::{draw_help_text, draw_text_field, field_block};
use super::signature_pad::draw_signature_pad;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Field, Focus, Signer};
use crate::ui::components::render_action_button;
use crate::ui::layout::FormLayout;
use ratatui::{
    layout::Margin,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Statement the student agrees to before submitting
const AGREEMENT_TEXT: &str =
    "I certify that the hours above are accurate and were not fabricated.";

/// Draw the whole form
pub fn draw_service_form(frame: &mut Frame, layout: &FormLayout, app: &App) {
    draw_header(frame, layout);

    for focus in [
        Focus::LastName,
        Focus::FirstName,
        Focus::StudentId,
        Focus::SchoolEmail,
        Focus::ServiceHours,
        Focus::Description,
        Focus::ContactPerson,
    ] {
        let Some(field) = focus.text_field() else {
            continue;
        };
        draw_text_field(
            frame,
            layout.focus_rect(focus),
            field.label(),
            app.form.text(field).unwrap_or_default(),
            app.state.focus == focus,
            field.is_multiline(),
            app.form.error_for(field),
        );
    }

    draw_dates(frame, layout, app);
    draw_opportunity(frame, layout, app);
    draw_agreement(frame, layout, app);

    for signer in [Signer::Student, Signer::Provider] {
        draw_signature_pad(
            frame,
            layout.pad_rect(signer),
            signer.field().label(),
            app.form.pad(signer),
            app.state.active_pad == Some(signer),
            app.form.error_for(signer.field()),
        );
    }

    draw_actions(frame, layout, app);
}

fn draw_header(frame: &mut Frame, layout: &FormLayout) {
    let block = Block::default()
        .title(Span::styled(
            " NHS Community Service Log ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(layout.header);
    frame.render_widget(block, layout.header);

    draw_help_text(
        frame,
        inner,
        &[
            ("Tab", "next field"),
            ("Enter", "add date"),
            ("Del", "remove date"),
            ("←/→", "opportunity"),
            ("Space", "agree"),
            (SUBMIT_SHORTCUT, "submit"),
            ("Ctrl+C", "quit"),
        ],
    );
}

fn draw_dates(frame: &mut Frame, layout: &FormLayout, app: &App) {
    let error = app.form.error_for(Field::ServiceDates);
    draw_text_field(
        frame,
        layout.date_entry,
        "Add Service Date (YYYY-MM-DD)",
        &app.state.date_entry,
        app.state.focus == Focus::DateEntry,
        false,
        error,
    );

    let dates = &app.form.record().service_dates;
    let content = if dates.is_empty() {
        Paragraph::new(Span::styled(
            "(no dates added)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(dates.joined())
    };
    let label = format!("{} ({})", Field::ServiceDates.label(), dates.len());
    frame.render_widget(
        content
            .wrap(Wrap { trim: true })
            .block(field_block(&label, false, None)),
        layout.date_list,
    );
}

fn draw_opportunity(frame: &mut Frame, layout: &FormLayout, app: &App) {
    let is_active = app.state.focus == Focus::Opportunity;
    let name = app.form.record().opportunity_name.as_str();

    let line = if name.is_empty() {
        Line::from(Span::styled(
            "(use ←/→ to choose)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let arrow = Style::default().fg(if is_active { Color::Cyan } else { Color::DarkGray });
        Line::from(vec![
            Span::styled("◀ ", arrow),
            Span::raw(name),
            Span::styled(" ▶", arrow),
        ])
    };

    frame.render_widget(
        Paragraph::new(line).block(field_block(
            Field::OpportunityName.label(),
            is_active,
            app.form.error_for(Field::OpportunityName),
        )),
        layout.opportunity,
    );
}

fn draw_agreement(frame: &mut Frame, layout: &FormLayout, app: &App) {
    let is_active = app.state.focus == Focus::Agreement;
    let mark = if app.form.record().fabrication_agreement {
        "[x] "
    } else {
        "[ ] "
    };
    let line = Line::from(vec![
        Span::styled(mark, Style::default().fg(Color::Cyan)),
        Span::raw(AGREEMENT_TEXT),
    ]);
    frame.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: true }).block(field_block(
            Field::FabricationAgreement.label(),
            is_active,
            app.form.error_for(Field::FabricationAgreement),
        )),
        layout.agreement,
    );
}

fn draw_actions(frame: &mut Frame, layout: &FormLayout, app: &App) {
    let submitting = app.form.is_submitting();
    let focus = app.state.focus;

    render_action_button(
        frame,
        layout.submit,
        if submitting { "Submitting…" } else { "Submit" },
        focus == Focus::Submit,
        !submitting,
        Color::Green,
    );
    render_action_button(
        frame,
        layout.clear_student,
        "Clear Student Sig.",
        focus == Focus::ClearStudentSignature,
        true,
        Color::Yellow,
    );
    render_action_button(
        frame,
        layout.clear_provider,
        "Clear Provider Sig.",
        focus == Focus::ClearProviderSignature,
        true,
        Color::Yellow,
    );
}

/// Draw the confirmation shown after a successful dispatch
pub fn draw_success(frame: &mut Frame, layout: &FormLayout, app: &App) {
    draw_header(frame, layout);

    let record = app.form.record();
    let block = Block::default()
        .title(" Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(layout.body).inner(Margin::new(2, 1));
    frame.render_widget(block, layout.body);

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(
            "Your service record was sent.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!(
            "{} {} ({})",
            record.first_name.trim(),
            record.last_name.trim(),
            record.student_id.trim()
        )),
        Line::from(format!(
            "{} hours at {} on {}",
            record.service_hours.trim(),
            record.opportunity_name,
            record.service_dates.joined()
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter", key),
            Span::raw(" / "),
            Span::styled("n", key),
            Span::raw(": submit another    "),
            Span::styled("q", key),
            Span::raw(" / "),
            Span::styled("Esc", key),
            Span::raw(": quit"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
