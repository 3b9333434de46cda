//! Form field identifiers

use serde::Serialize;
use std::fmt;

/// Every field of a service record that can carry a validation error.
///
/// The variant order is the display order of the form, and `key()` is the
/// name the field travels under in the submitted JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    LastName,
    FirstName,
    StudentId,
    SchoolEmail,
    ServiceDates,
    ServiceHours,
    ServiceDescription,
    OpportunityName,
    ContactPerson,
    FabricationAgreement,
    StudentSignature,
    ProviderSignature,
}

impl Field {
    /// All fields in form order
    #[allow(dead_code)]
    pub const ALL: [Field; 12] = [
        Field::LastName,
        Field::FirstName,
        Field::StudentId,
        Field::SchoolEmail,
        Field::ServiceDates,
        Field::ServiceHours,
        Field::ServiceDescription,
        Field::OpportunityName,
        Field::ContactPerson,
        Field::FabricationAgreement,
        Field::StudentSignature,
        Field::ProviderSignature,
    ];

    /// Fields holding free text, editable through `FormController::set_text`
    #[allow(dead_code)]
    pub const TEXT: [Field; 7] = [
        Field::LastName,
        Field::FirstName,
        Field::StudentId,
        Field::SchoolEmail,
        Field::ServiceHours,
        Field::ServiceDescription,
        Field::ContactPerson,
    ];

    /// JSON key used in the submission payload
    pub fn key(self) -> &'static str {
        match self {
            Field::LastName => "lastName",
            Field::FirstName => "firstName",
            Field::StudentId => "studentId",
            Field::SchoolEmail => "schoolEmail",
            Field::ServiceDates => "serviceDates",
            Field::ServiceHours => "serviceHours",
            Field::ServiceDescription => "serviceDescription",
            Field::OpportunityName => "opportunityName",
            Field::ContactPerson => "contactPerson",
            Field::FabricationAgreement => "fabricationAgreement",
            Field::StudentSignature => "studentSignature",
            Field::ProviderSignature => "providerSignature",
        }
    }

    /// Human-readable label shown on the field border
    pub fn label(self) -> &'static str {
        match self {
            Field::LastName => "Last Name",
            Field::FirstName => "First Name",
            Field::StudentId => "Student ID",
            Field::SchoolEmail => "School Email",
            Field::ServiceDates => "Service Dates",
            Field::ServiceHours => "Service Hours",
            Field::ServiceDescription => "Description of Service",
            Field::OpportunityName => "Opportunity",
            Field::ContactPerson => "Contact Person (name, phone or email)",
            Field::FabricationAgreement => "Agreement",
            Field::StudentSignature => "Student Signature",
            Field::ProviderSignature => "Service Provider Signature",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::ServiceDescription)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Field::ALL.len());
    }

    #[test]
    fn test_serialize_matches_key() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.key()));
        }
    }

    #[test]
    fn test_text_fields() {
        assert!(Field::TEXT.contains(&Field::LastName));
        assert!(Field::TEXT.contains(&Field::ServiceHours));
        assert!(!Field::TEXT.contains(&Field::ServiceDates));
        assert!(!Field::TEXT.contains(&Field::OpportunityName));
        assert!(!Field::TEXT.contains(&Field::StudentSignature));
    }

    #[test]
    fn test_only_description_is_multiline() {
        let multiline: Vec<_> = Field::ALL.into_iter().filter(|f| f.is_multiline()).collect();
        assert_eq!(multiline, vec![Field::ServiceDescription]);
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(Field::StudentId.to_string(), "studentId");
    }
}
