//! Service record value objects

use chrono::NaiveDate;

/// Display format for service dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Service opportunities a student may log hours against.
///
/// Presented as a closed choice; the list is not extensible at runtime.
pub const OPPORTUNITIES: &[&str] = &[
    "Peer Tutoring Center",
    "Library Media Center Aide",
    "Elementary Reading Buddies",
    "Community Food Bank",
    "Senior Center Visits",
    "Park and Trail Cleanup",
    "Animal Shelter Volunteer",
    "Blood Drive Support",
    "School Event Setup",
    "Other Approved Opportunity",
];

/// Insertion-ordered collection of distinct service dates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDates {
    dates: Vec<NaiveDate>,
}

impl ServiceDates {
    /// Add a date. Returns false when it was already present.
    pub fn add(&mut self, date: NaiveDate) -> bool {
        if self.dates.contains(&date) {
            return false;
        }
        self.dates.push(date);
        true
    }

    /// Remove a date. Returns false when it was not present.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        let before = self.dates.len();
        self.dates.retain(|d| *d != date);
        self.dates.len() != before
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Dates formatted and joined with ", " in insertion order
    pub fn joined(&self) -> String {
        self.dates
            .iter()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse a date typed as `YYYY-MM-DD`
pub fn parse_service_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// One community-service record as entered on the form.
///
/// Numeric fields are kept as the text the student typed; they are parsed
/// only when the submission payload is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceRecord {
    pub last_name: String,
    pub first_name: String,
    pub student_id: String,
    pub school_email: String,
    pub service_dates: ServiceDates,
    pub service_hours: String,
    pub service_description: String,
    pub opportunity_name: String,
    pub contact_person: String,
    pub fabrication_agreement: bool,
    /// Data URL of the student's signature once captured
    pub student_signature: Option<String>,
    /// Data URL of the service provider's signature once captured
    pub provider_signature: Option<String>,
}

impl ServiceRecord {
    /// An empty record template
    pub fn empty() -> Self {
        Self::default()
    }
}
