//! Validation rules for a service record

use super::field::Field;
use super::record::{ServiceRecord, OPPORTUNITIES};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    static ref STUDENT_ID_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const STUDENT_ID_REQUIRED: &str = "Student ID is required";
pub const STUDENT_ID_DIGITS: &str = "Student ID must contain only digits";
pub const STUDENT_ID_TOO_LONG: &str = "Student ID must be at most 18 digits";
pub const EMAIL_REQUIRED: &str = "School email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email address";
pub const DATES_REQUIRED: &str = "Add at least one service date";
pub const HOURS_REQUIRED: &str = "Service hours are required";
pub const HOURS_INVALID: &str = "Service hours must be a non-negative number";
pub const DESCRIPTION_REQUIRED: &str = "Description of service is required";
pub const OPPORTUNITY_REQUIRED: &str = "Select an opportunity from the list";
pub const CONTACT_REQUIRED: &str = "Contact person is required";
pub const AGREEMENT_REQUIRED: &str = "You must agree to the statement before submitting";
pub const STUDENT_SIGNATURE_REQUIRED: &str = "Student signature is required";
pub const PROVIDER_SIGNATURE_REQUIRED: &str = "Service provider signature is required";

/// Longest student id that always fits the integer sent on the wire
pub const STUDENT_ID_MAX_DIGITS: usize = 18;

/// Per-field validation messages. Passing fields have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    #[allow(dead_code)]
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in form order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }
}

/// Whether the signature surfaces currently hold strokes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignatureStatus {
    pub student_signed: bool,
    pub provider_signed: bool,
}

pub fn is_valid_student_id(value: &str) -> bool {
    STUDENT_ID_RE.is_match(value.trim())
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Parse service hours, accepting only finite non-negative numbers
pub fn parse_hours(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite() && *h >= 0.0)
}

fn required(errors: &mut ValidationErrors, field: Field, value: &str, message: &'static str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, message);
        false
    } else {
        true
    }
}

/// Run every record rule and collect the failures
pub fn validate_record(record: &ServiceRecord, signatures: SignatureStatus) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    required(&mut errors, Field::LastName, &record.last_name, LAST_NAME_REQUIRED);
    required(&mut errors, Field::FirstName, &record.first_name, FIRST_NAME_REQUIRED);

    if required(&mut errors, Field::StudentId, &record.student_id, STUDENT_ID_REQUIRED) {
        if !is_valid_student_id(&record.student_id) {
            errors.insert(Field::StudentId, STUDENT_ID_DIGITS);
        } else if record.student_id.trim().len() > STUDENT_ID_MAX_DIGITS {
            errors.insert(Field::StudentId, STUDENT_ID_TOO_LONG);
        }
    }

    if required(&mut errors, Field::SchoolEmail, &record.school_email, EMAIL_REQUIRED)
        && !is_valid_email(&record.school_email)
    {
        errors.insert(Field::SchoolEmail, EMAIL_INVALID);
    }

    if record.service_dates.is_empty() {
        errors.insert(Field::ServiceDates, DATES_REQUIRED);
    }

    if required(&mut errors, Field::ServiceHours, &record.service_hours, HOURS_REQUIRED)
        && parse_hours(&record.service_hours).is_none()
    {
        errors.insert(Field::ServiceHours, HOURS_INVALID);
    }

    required(
        &mut errors,
        Field::ServiceDescription,
        &record.service_description,
        DESCRIPTION_REQUIRED,
    );

    if !OPPORTUNITIES.contains(&record.opportunity_name.as_str()) {
        errors.insert(Field::OpportunityName, OPPORTUNITY_REQUIRED);
    }

    required(&mut errors, Field::ContactPerson, &record.contact_person, CONTACT_REQUIRED);

    if !record.fabrication_agreement {
        errors.insert(Field::FabricationAgreement, AGREEMENT_REQUIRED);
    }

    if !signatures.student_signed {
        errors.insert(Field::StudentSignature, STUDENT_SIGNATURE_REQUIRED);
    }
    if !signatures.provider_signed {
        errors.insert(Field::ProviderSignature, PROVIDER_SIGNATURE_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::record::parse_service_date;

    const SIGNED: SignatureStatus = SignatureStatus {
        student_signed: true,
        provider_signed: true,
    };

    fn valid_record() -> ServiceRecord {
        let mut record = ServiceRecord::empty();
        record.last_name = "Rivera".to_string();
        record.first_name = "Ana".to_string();
        record.student_id = "1023".to_string();
        record.school_email = "ana.rivera@school.org".to_string();
        record
            .service_dates
            .add(parse_service_date("2024-01-05").unwrap());
        record.service_hours = "2.5".to_string();
        record.service_description = "Shelved returns".to_string();
        record.opportunity_name = OPPORTUNITIES[1].to_string();
        record.contact_person = "Ms. Lee, 555-0100".to_string();
        record.fabrication_agreement = true;
        record
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        assert!(validate_record(&valid_record(), SIGNED).is_empty());
    }

    #[test]
    fn test_empty_record_flags_every_field() {
        let errors = validate_record(&ServiceRecord::empty(), SignatureStatus::default());
        assert_eq!(errors.fields().collect::<Vec<_>>(), Field::ALL.to_vec());
    }

    #[test]
    fn test_whitespace_only_text_is_empty() {
        for field in Field::TEXT {
            let mut record = valid_record();
            let slot = match field {
                Field::LastName => &mut record.last_name,
                Field::FirstName => &mut record.first_name,
                Field::StudentId => &mut record.student_id,
                Field::SchoolEmail => &mut record.school_email,
                Field::ServiceHours => &mut record.service_hours,
                Field::ServiceDescription => &mut record.service_description,
                Field::ContactPerson => &mut record.contact_person,
                _ => unreachable!(),
            };
            *slot = "   ".to_string();
            let errors = validate_record(&record, SIGNED);
            assert_eq!(errors.len(), 1, "{field}");
            assert!(errors.contains(field), "{field}");
        }
    }

    #[test]
    fn test_student_id_digits_only() {
        assert!(is_valid_student_id("1234"));
        assert!(!is_valid_student_id("12a"));
        assert!(!is_valid_student_id("-12"));
        assert!(!is_valid_student_id("١٢٣"));

        let mut record = valid_record();
        record.student_id = "12a".to_string();
        let errors = validate_record(&record, SIGNED);
        assert_eq!(errors.get(Field::StudentId), Some(STUDENT_ID_DIGITS));
    }

    #[test]
    fn test_student_id_length_limit() {
        let mut record = valid_record();
        record.student_id = "9".repeat(STUDENT_ID_MAX_DIGITS);
        assert!(validate_record(&record, SIGNED).is_empty());

        record.student_id = "9".repeat(STUDENT_ID_MAX_DIGITS + 1);
        let errors = validate_record(&record, SIGNED);
        assert_eq!(errors.get(Field::StudentId), Some(STUDENT_ID_TOO_LONG));
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email("a b@c.com"));

        let mut record = valid_record();
        record.school_email = "a@b".to_string();
        let errors = validate_record(&record, SIGNED);
        assert_eq!(errors.get(Field::SchoolEmail), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_service_hours_numeric() {
        assert_eq!(parse_hours("2.5"), Some(2.5));
        assert_eq!(parse_hours("0"), Some(0.0));
        assert_eq!(parse_hours("abc"), None);
        assert_eq!(parse_hours("-1"), None);
        assert_eq!(parse_hours("NaN"), None);
        assert_eq!(parse_hours("inf"), None);

        let mut record = valid_record();
        record.service_hours = "abc".to_string();
        let errors = validate_record(&record, SIGNED);
        assert_eq!(errors.get(Field::ServiceHours), Some(HOURS_INVALID));
    }

    #[test]
    fn test_missing_dates() {
        let mut record = valid_record();
        record.service_dates = Default::default();
        let errors = validate_record(&record, SIGNED);
        assert_eq!(errors.get(Field::ServiceDates), Some(DATES_REQUIRED));
    }

    #[test]
    fn test_opportunity_must_be_listed() {
        let mut record = valid_record();
        record.opportunity_name = "Made Up Club".to_string();
        let errors = validate_record(&record, SIGNED);
        assert_eq!(errors.get(Field::OpportunityName), Some(OPPORTUNITY_REQUIRED));
    }

    #[test]
    fn test_agreement_required() {
        let mut record = valid_record();
        record.fabrication_agreement = false;
        let errors = validate_record(&record, SIGNED);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::FabricationAgreement]);
    }

    #[test]
    fn test_each_missing_signature_is_named() {
        let errors = validate_record(
            &valid_record(),
            SignatureStatus {
                student_signed: true,
                provider_signed: false,
            },
        );
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::ProviderSignature]);

        let errors = validate_record(
            &valid_record(),
            SignatureStatus {
                student_signed: false,
                provider_signed: true,
            },
        );
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::StudentSignature]);
    }
}
