//! Application state and core logic

use crate::config::FormConfig;
use crate::error::SinkError;
use crate::signature::{PadPoint, SignaturePad};
use crate::sink::{HttpSink, RecordSink};
use crate::state::{
    parse_service_date, AppState, Field, Focus, FormController, Signer, DATE_FORMAT,
};
use crate::ui::layout::FormLayout;
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// A dispatch running on a background task
struct PendingDispatch {
    id: Uuid,
    handle: JoinHandle<Result<(), SinkError>>,
}

/// Whether a key event inserts its character rather than acting as a chord
fn is_typed(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Main application struct
pub struct App {
    /// UI-only state (focus, date entry, status line)
    pub state: AppState,
    /// The service record being entered
    pub form: FormController<SignaturePad>,
    /// Where submitted records go
    sink: Arc<dyn RecordSink>,
    pending: Option<PendingDispatch>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App posting to the configured endpoint
    pub fn new(config: &FormConfig) -> Result<Self> {
        let sink = HttpSink::new(config.submit_url()?);
        tracing::info!(endpoint = sink.endpoint(), "submission endpoint configured");
        Ok(Self::with_sink(Arc::new(sink), config.pad_size()))
    }

    /// Create an App around any sink
    pub fn with_sink(sink: Arc<dyn RecordSink>, pad_size: (f64, f64)) -> Self {
        let (width, height) = pad_size;
        Self {
            state: AppState::default(),
            form: FormController::new(
                SignaturePad::new(width, height),
                SignaturePad::new(width, height),
            ),
            sink,
            pending: None,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while a mouse stroke is being drawn
    pub fn is_drawing(&self) -> bool {
        self.state.active_pad.is_some()
    }

    fn layout(&self) -> FormLayout {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        FormLayout::new(Rect::new(0, 0, width, height))
    }

    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.form.has_succeeded() {
            self.handle_success_key(key);
            return Ok(());
        }

        if self.form.submit_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.form.dismiss_submit_error();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.start_submit();
            }
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            _ => self.handle_focused_key(key),
        }
        Ok(())
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => self.submit_another(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        let focus = self.state.focus;

        if let Some(field) = focus.text_field() {
            match key.code {
                KeyCode::Char(c) if is_typed(&key) => self.edit_text(field, |s| s.push(c)),
                KeyCode::Backspace => self.edit_text(field, |s| {
                    s.pop();
                }),
                KeyCode::Enter if field.is_multiline() => self.edit_text(field, |s| s.push('\n')),
                KeyCode::Enter => self.state.next_focus(),
                _ => {}
            }
            return;
        }

        match (focus, key.code) {
            (Focus::DateEntry, KeyCode::Char(c)) if is_typed(&key) => {
                self.state.date_entry.push(c)
            }
            (Focus::DateEntry, KeyCode::Backspace) => {
                self.state.date_entry.pop();
            }
            (Focus::DateEntry, KeyCode::Enter) => self.add_date_from_entry(),
            (Focus::DateEntry, KeyCode::Delete) => self.remove_date_from_entry(),

            (Focus::Opportunity, KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter) => {
                let name = self.state.next_opportunity();
                self.form.set_opportunity_name(name.to_string());
            }
            (Focus::Opportunity, KeyCode::Left) => {
                let name = self.state.prev_opportunity();
                self.form.set_opportunity_name(name.to_string());
            }

            (Focus::Agreement, KeyCode::Char(' ') | KeyCode::Enter) => self.toggle_agreement(),

            (f, KeyCode::Enter | KeyCode::Char(' ')) if f.is_button() => self.activate(f),
            _ => {}
        }
    }

    /// Apply an edit to the current value of a text field
    fn edit_text(&mut self, field: Field, edit: impl FnOnce(&mut String)) {
        let mut value = self.form.text(field).unwrap_or_default().to_string();
        edit(&mut value);
        self.form.set_text(field, value);
    }

    fn toggle_agreement(&mut self) {
        let agreed = self.form.record().fabrication_agreement;
        self.form.set_fabrication_agreement(!agreed);
    }

    fn add_date_from_entry(&mut self) {
        let entry = self.state.date_entry.trim().to_string();
        match parse_service_date(&entry) {
            Some(date) => {
                if self.form.add_service_date(date) {
                    self.state.set_status(format!("Added {entry}"));
                } else {
                    self.state.set_status(format!("{entry} is already listed"));
                }
                self.state.date_entry.clear();
            }
            None => self
                .state
                .set_status(format!("\"{entry}\" is not a date; use YYYY-MM-DD")),
        }
    }

    /// Remove the typed date, or the latest date when the entry is empty
    fn remove_date_from_entry(&mut self) {
        let entry = self.state.date_entry.trim().to_string();
        let target = if entry.is_empty() {
            self.form.record().service_dates.last()
        } else {
            parse_service_date(&entry)
        };
        if let Some(date) = target {
            if self.form.remove_service_date(date) {
                self.state.set_status(format!("Removed {}", date.format(DATE_FORMAT)));
                self.state.date_entry.clear();
            }
        }
    }

    fn activate(&mut self, focus: Focus) {
        if focus == Focus::Submit {
            self.start_submit();
        } else if let Some(signer) = focus.clears() {
            self.form.clear_signature(signer);
        }
    }

    /// Validate and hand the payload to a background dispatch task
    pub fn start_submit(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let Some(prepared) = self.form.prepare_submission(Utc::now()) else {
            if !self.form.errors().is_empty() {
                self.state.set_status("Please fix the highlighted fields");
            }
            return;
        };

        tracing::info!(submission_id = %prepared.id, "submitting service record");
        let sink = Arc::clone(&self.sink);
        let payload = prepared.payload;
        let handle = tokio::spawn(async move { sink.dispatch(&payload).await });
        self.pending = Some(PendingDispatch {
            id: prepared.id,
            handle,
        });
    }

    /// Fold a finished dispatch back into the form without blocking
    pub async fn poll_submission(&mut self) {
        if self
            .pending
            .as_ref()
            .is_some_and(|p| p.handle.is_finished())
        {
            self.wait_for_submission().await;
        }
    }

    /// Wait for the running dispatch, if any, and record its outcome
    pub async fn wait_for_submission(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let result = match pending.handle.await {
            Ok(result) => result,
            Err(err) => Err(SinkError::Task(err.to_string())),
        };
        self.form.finish_submission(pending.id, result);
        if self.form.has_succeeded() {
            self.state.status = None;
        }
    }

    /// Start a fresh record after a successful submission
    pub fn submit_another(&mut self) {
        self.form.reset();
        self.state.reset();
    }

    /// Handle mouse input: strokes on signature pads, clicks elsewhere
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.form.has_succeeded() || self.form.submit_error().is_some() {
            return Ok(());
        }

        let layout = self.layout();
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(signer) = layout.pad_at(column, row) {
                    let point = self.pad_point(&layout, signer, column, row);
                    self.form.pad_mut(signer).begin_stroke(point);
                    self.state.active_pad = Some(signer);
                } else if let Some(focus) = layout.focus_at(column, row) {
                    self.click(focus);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(signer) = self.state.active_pad {
                    let point = self.pad_point(&layout, signer, column, row);
                    self.form.pad_mut(signer).extend_stroke(point);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(signer) = self.state.active_pad.take() {
                    self.form.pad_mut(signer).end_stroke();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn pad_point(
        &self,
        layout: &FormLayout,
        signer: Signer,
        column: u16,
        row: u16,
    ) -> PadPoint {
        let pad = self.form.pad(signer);
        layout.cell_to_pad(signer, column, row, pad.width(), pad.height())
    }

    fn click(&mut self, focus: Focus) {
        self.state.focus = focus;
        match focus {
            Focus::Agreement => self.toggle_agreement(),
            Focus::Opportunity => {
                let name = self.state.next_opportunity();
                self.form.set_opportunity_name(name.to_string());
            }
            f if f.is_button() => self.activate(f),
            _ => {}
        }
    }
}
