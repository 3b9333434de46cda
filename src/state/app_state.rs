//! Application state definitions

use super::forms::{Field, Signer, OPPORTUNITIES};
use std::time::{Duration, Instant};

/// How long a status-bar message stays visible
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Focusable element of the form, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    LastName,
    FirstName,
    StudentId,
    SchoolEmail,
    DateEntry,
    ServiceHours,
    Description,
    Opportunity,
    ContactPerson,
    Agreement,
    Submit,
    ClearStudentSignature,
    ClearProviderSignature,
}

impl Focus {
    pub const ORDER: [Focus; 13] = [
        Focus::LastName,
        Focus::FirstName,
        Focus::StudentId,
        Focus::SchoolEmail,
        Focus::DateEntry,
        Focus::ServiceHours,
        Focus::Description,
        Focus::Opportunity,
        Focus::ContactPerson,
        Focus::Agreement,
        Focus::Submit,
        Focus::ClearStudentSignature,
        Focus::ClearProviderSignature,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let count = Self::ORDER.len();
        Self::ORDER[(self.index() + count - 1) % count]
    }

    /// Record field edited as text while this element has focus
    pub fn text_field(self) -> Option<Field> {
        match self {
            Focus::LastName => Some(Field::LastName),
            Focus::FirstName => Some(Field::FirstName),
            Focus::StudentId => Some(Field::StudentId),
            Focus::SchoolEmail => Some(Field::SchoolEmail),
            Focus::ServiceHours => Some(Field::ServiceHours),
            Focus::Description => Some(Field::ServiceDescription),
            Focus::ContactPerson => Some(Field::ContactPerson),
            _ => None,
        }
    }

    /// Signature cleared when this button is activated
    pub fn clears(self) -> Option<Signer> {
        match self {
            Focus::ClearStudentSignature => Some(Signer::Student),
            Focus::ClearProviderSignature => Some(Signer::Provider),
            _ => None,
        }
    }

    pub fn is_button(self) -> bool {
        matches!(
            self,
            Focus::Submit | Focus::ClearStudentSignature | Focus::ClearProviderSignature
        )
    }
}

/// Transient message for the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub created: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= STATUS_TTL
    }
}

/// UI state that is not part of the service record
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Focused form element
    pub focus: Focus,
    /// Text typed into the date entry, not yet added
    pub date_entry: String,
    /// Index into `OPPORTUNITIES` of the highlighted choice, if any
    pub opportunity_index: Option<usize>,
    /// Signature pad currently receiving a mouse stroke
    pub active_pad: Option<Signer>,
    pub status: Option<StatusMessage>,
}

impl AppState {
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(text));
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status(&mut self) {
        if self.status.as_ref().is_some_and(StatusMessage::is_expired) {
            self.status = None;
        }
    }

    /// Move the opportunity highlight forward and return the chosen name
    pub fn next_opportunity(&mut self) -> &'static str {
        let next = match self.opportunity_index {
            Some(i) => (i + 1) % OPPORTUNITIES.len(),
            None => 0,
        };
        self.opportunity_index = Some(next);
        OPPORTUNITIES[next]
    }

    /// Move the opportunity highlight backward and return the chosen name
    pub fn prev_opportunity(&mut self) -> &'static str {
        let count = OPPORTUNITIES.len();
        let prev = match self.opportunity_index {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        };
        self.opportunity_index = Some(prev);
        OPPORTUNITIES[prev]
    }

    /// Return to the state of a freshly opened form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_forward() {
        let mut focus = Focus::LastName;
        for _ in 0..Focus::ORDER.len() {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::LastName);
        assert_eq!(Focus::ClearProviderSignature.next(), Focus::LastName);
    }

    #[test]
    fn test_focus_cycles_backward() {
        assert_eq!(Focus::LastName.prev(), Focus::ClearProviderSignature);
        assert_eq!(Focus::Submit.prev(), Focus::Agreement);
    }

    #[test]
    fn test_text_fields_map_to_record() {
        let text: Vec<_> = Focus::ORDER.iter().filter_map(|f| f.text_field()).collect();
        assert_eq!(text, Field::TEXT.to_vec());
    }

    #[test]
    fn test_buttons() {
        assert!(Focus::Submit.is_button());
        assert!(!Focus::Agreement.is_button());
        assert_eq!(Focus::ClearStudentSignature.clears(), Some(Signer::Student));
        assert_eq!(Focus::ClearProviderSignature.clears(), Some(Signer::Provider));
        assert_eq!(Focus::Submit.clears(), None);
    }

    #[test]
    fn test_opportunity_cycling() {
        let mut state = AppState::default();
        assert_eq!(state.next_opportunity(), OPPORTUNITIES[0]);
        assert_eq!(state.next_opportunity(), OPPORTUNITIES[1]);
        assert_eq!(state.prev_opportunity(), OPPORTUNITIES[0]);
        assert_eq!(state.prev_opportunity(), OPPORTUNITIES[OPPORTUNITIES.len() - 1]);
        assert_eq!(state.next_opportunity(), OPPORTUNITIES[0]);
    }

    #[test]
    fn test_prev_opportunity_from_nothing_selects_last() {
        let mut state = AppState::default();
        assert_eq!(state.prev_opportunity(), OPPORTUNITIES[OPPORTUNITIES.len() - 1]);
    }

    #[test]
    fn test_fresh_status_is_kept() {
        let mut state = AppState::default();
        state.set_status("Added 2024-01-05");
        state.expire_status();
        assert!(state.status.is_some());
    }

    #[test]
    fn test_reset_clears_ui_state() {
        let mut state = AppState {
            focus: Focus::Submit,
            date_entry: "2024".to_string(),
            opportunity_index: Some(3),
            active_pad: Some(Signer::Student),
            status: Some(StatusMessage::new("x")),
        };
        state.reset();
        assert_eq!(state.focus, Focus::LastName);
        assert!(state.date_entry.is_empty());
        assert!(state.opportunity_index.is_none());
        assert!(state.active_pad.is_none());
        assert!(state.status.is_none());
    }
}
