//! Screen geometry for the form
//!
//! Drawing and mouse handling both derive positions from `FormLayout`, so a
//! click always lands on the element that was drawn there.
//!
//! ```text
//! Row 0-2:  Header
//! Body:     Left column (identity and service fields)
//!           Right column (opportunity, contact, agreement, signature pads, actions)
//! Bottom:   Status bar (1 row)
//! ```

use super::components::BUTTON_HEIGHT;
use crate::signature::PadPoint;
use crate::state::{Focus, Signer};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

/// Height of a single-line field (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Resolved rectangles for every element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub header: Rect,
    pub body: Rect,
    pub last_name: Rect,
    pub first_name: Rect,
    pub student_id: Rect,
    pub school_email: Rect,
    pub date_entry: Rect,
    pub date_list: Rect,
    pub service_hours: Rect,
    pub description: Rect,
    pub opportunity: Rect,
    pub contact_person: Rect,
    pub agreement: Rect,
    pub student_pad: Rect,
    pub provider_pad: Rect,
    pub submit: Rect,
    pub clear_student: Rect,
    pub clear_provider: Rect,
    pub status_bar: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Form
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT), // Last name
                Constraint::Length(FIELD_HEIGHT), // First name
                Constraint::Length(FIELD_HEIGHT), // Student ID
                Constraint::Length(FIELD_HEIGHT), // School email
                Constraint::Length(FIELD_HEIGHT), // Date entry
                Constraint::Length(FIELD_HEIGHT), // Added dates
                Constraint::Length(FIELD_HEIGHT), // Hours
                Constraint::Min(FIELD_HEIGHT),    // Description
            ])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),  // Opportunity
                Constraint::Length(FIELD_HEIGHT),  // Contact person
                Constraint::Length(FIELD_HEIGHT),  // Agreement
                Constraint::Fill(1),               // Student signature
                Constraint::Fill(1),               // Provider signature
                Constraint::Length(BUTTON_HEIGHT), // Actions
            ])
            .split(columns[1]);

        let actions = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(right[5]);

        Self {
            header: rows[0],
            body: rows[1],
            last_name: left[0],
            first_name: left[1],
            student_id: left[2],
            school_email: left[3],
            date_entry: left[4],
            date_list: left[5],
            service_hours: left[6],
            description: left[7],
            opportunity: right[0],
            contact_person: right[1],
            agreement: right[2],
            student_pad: right[3],
            provider_pad: right[4],
            submit: actions[0],
            clear_student: actions[1],
            clear_provider: actions[2],
            status_bar: rows[2],
        }
    }

    /// Area drawn for a focusable element
    pub fn focus_rect(&self, focus: Focus) -> Rect {
        match focus {
            Focus::LastName => self.last_name,
            Focus::FirstName => self.first_name,
            Focus::StudentId => self.student_id,
            Focus::SchoolEmail => self.school_email,
            Focus::DateEntry => self.date_entry,
            Focus::ServiceHours => self.service_hours,
            Focus::Description => self.description,
            Focus::Opportunity => self.opportunity,
            Focus::ContactPerson => self.contact_person,
            Focus::Agreement => self.agreement,
            Focus::Submit => self.submit,
            Focus::ClearStudentSignature => self.clear_student,
            Focus::ClearProviderSignature => self.clear_provider,
        }
    }

    /// Focusable element under a screen cell
    pub fn focus_at(&self, column: u16, row: u16) -> Option<Focus> {
        let pos = Position::new(column, row);
        Focus::ORDER
            .into_iter()
            .find(|f| self.focus_rect(*f).contains(pos))
    }

    pub fn pad_rect(&self, signer: Signer) -> Rect {
        match signer {
            Signer::Student => self.student_pad,
            Signer::Provider => self.provider_pad,
        }
    }

    /// Drawing area of a pad, inside its border
    pub fn pad_inner(&self, signer: Signer) -> Rect {
        self.pad_rect(signer).inner(Margin::new(1, 1))
    }

    /// Signature pad whose drawing area contains a screen cell
    pub fn pad_at(&self, column: u16, row: u16) -> Option<Signer> {
        let pos = Position::new(column, row);
        [Signer::Student, Signer::Provider]
            .into_iter()
            .find(|s| self.pad_inner(*s).contains(pos))
    }

    /// Map a screen cell onto pad coordinates, using the cell center.
    ///
    /// Cells outside the drawing area map past its edges; the pad clamps them.
    pub fn cell_to_pad(
        &self,
        signer: Signer,
        column: u16,
        row: u16,
        pad_width: f64,
        pad_height: f64,
    ) -> PadPoint {
        let inner = self.pad_inner(signer);
        let width = f64::from(inner.width.max(1));
        let height = f64::from(inner.height.max(1));
        let dx = f64::from(column) - f64::from(inner.x) + 0.5;
        let dy = f64::from(row) - f64::from(inner.y) + 0.5;
        PadPoint::new(dx / width * pad_width, dy / height * pad_height)
    }
}

/// Center a box of the given size inside an area
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> FormLayout {
        FormLayout::new(Rect::new(0, 0, 120, 40))
    }

    #[test]
    fn test_header_and_status_rows() {
        let layout = layout();
        assert_eq!(layout.header, Rect::new(0, 0, 120, 3));
        assert_eq!(layout.status_bar, Rect::new(0, 39, 120, 1));
    }

    #[test]
    fn test_left_column_stacks_fields() {
        let layout = layout();
        assert_eq!(layout.last_name.y, 3);
        assert_eq!(layout.first_name.y, 6);
        assert_eq!(layout.date_entry.y, 15);
        assert_eq!(layout.description.y, 24);
        assert_eq!(layout.last_name.width, 60);
    }

    #[test]
    fn test_focus_at_finds_each_element() {
        let layout = layout();
        for focus in Focus::ORDER {
            let rect = layout.focus_rect(focus);
            assert_eq!(layout.focus_at(rect.x + 1, rect.y + 1), Some(focus), "{focus:?}");
        }
    }

    #[test]
    fn test_focus_at_outside_form() {
        assert_eq!(layout().focus_at(5, 1), None);
    }

    #[test]
    fn test_pad_at_excludes_border() {
        let layout = layout();
        let rect = layout.student_pad;
        assert_eq!(layout.pad_at(rect.x, rect.y), None);
        assert_eq!(layout.pad_at(rect.x + 1, rect.y + 1), Some(Signer::Student));
        let rect = layout.provider_pad;
        assert_eq!(layout.pad_at(rect.x + 2, rect.y + 2), Some(Signer::Provider));
    }

    #[test]
    fn test_cell_to_pad_spans_pad_space() {
        let layout = layout();
        let inner = layout.pad_inner(Signer::Student);

        let first = layout.cell_to_pad(Signer::Student, inner.x, inner.y, 300.0, 100.0);
        assert!(first.x > 0.0 && first.x < 300.0 / f64::from(inner.width));
        assert!(first.y > 0.0 && first.y < 100.0 / f64::from(inner.height));

        let last = layout.cell_to_pad(
            Signer::Student,
            inner.right() - 1,
            inner.bottom() - 1,
            300.0,
            100.0,
        );
        assert!(last.x < 300.0 && last.x > 300.0 - 300.0 / f64::from(inner.width));
        assert!(last.y < 100.0 && last.y > 100.0 - 100.0 / f64::from(inner.height));
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(centered(area, 40, 10), Rect::new(30, 10, 40, 10));
        assert_eq!(centered(area, 200, 50), area);
    }
}
