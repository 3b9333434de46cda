//! Submission payload sent to the record sink

use super::record::ServiceRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// JSON body of one submission.
///
/// Built only from a record that already passed validation; numeric
/// conversions are not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// ISO-8601 submission time in UTC with millisecond precision
    pub timestamp: String,
    pub last_name: String,
    pub first_name: String,
    /// `None` only for text that validation would reject
    pub student_id: Option<u64>,
    pub school_email: String,
    /// Dates joined with ", "
    pub service_dates: String,
    /// NaN (serialized as null) when the hours text does not parse
    pub service_hours: f64,
    pub service_description: String,
    pub opportunity_name: String,
    pub contact_person: String,
    pub fabrication_agreement: bool,
    pub student_signature: String,
    pub provider_signature: String,
}

impl SubmissionPayload {
    /// Assemble the payload from record fields and freshly captured signatures
    pub fn build(
        record: &ServiceRecord,
        student_signature: String,
        provider_signature: String,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            last_name: record.last_name.trim().to_string(),
            first_name: record.first_name.trim().to_string(),
            student_id: record.student_id.trim().parse().ok(),
            school_email: record.school_email.trim().to_string(),
            service_dates: record.service_dates.joined(),
            service_hours: record.service_hours.trim().parse().unwrap_or(f64::NAN),
            service_description: record.service_description.trim().to_string(),
            opportunity_name: record.opportunity_name.clone(),
            contact_person: record.contact_person.trim().to_string(),
            fabrication_agreement: record.fabrication_agreement,
            student_signature,
            provider_signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::record::{parse_service_date, OPPORTUNITIES};
    use crate::state::forms::validation::STUDENT_ID_MAX_DIGITS;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record() -> ServiceRecord {
        let mut record = ServiceRecord::empty();
        record.last_name = " Rivera ".to_string();
        record.first_name = "Ana".to_string();
        record.student_id = "1023".to_string();
        record.school_email = "ana@school.org".to_string();
        for d in ["2024-01-05", "2024-01-06"] {
            record.service_dates.add(parse_service_date(d).unwrap());
        }
        record.service_hours = "2.5".to_string();
        record.service_description = "Sorted cans".to_string();
        record.opportunity_name = OPPORTUNITIES[3].to_string();
        record.contact_person = "Mr. Ortiz".to_string();
        record.fabrication_agreement = true;
        record
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 7, 15, 30, 0).unwrap()
    }

    #[test]
    fn test_wire_body() {
        let payload = SubmissionPayload::build(
            &record(),
            "data:image/svg+xml;base64,AA==".to_string(),
            "data:image/svg+xml;base64,BB==".to_string(),
            at(),
        );
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            body,
            json!({
                "timestamp": "2024-01-07T15:30:00.000Z",
                "lastName": "Rivera",
                "firstName": "Ana",
                "studentId": 1023,
                "schoolEmail": "ana@school.org",
                "serviceDates": "2024-01-05, 2024-01-06",
                "serviceHours": 2.5,
                "serviceDescription": "Sorted cans",
                "opportunityName": "Community Food Bank",
                "contactPerson": "Mr. Ortiz",
                "fabricationAgreement": true,
                "studentSignature": "data:image/svg+xml;base64,AA==",
                "providerSignature": "data:image/svg+xml;base64,BB=="
            })
        );
    }

    #[test]
    fn test_student_id_is_integer() {
        let payload = SubmissionPayload::build(&record(), String::new(), String::new(), at());
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body["studentId"].is_u64());
    }

    #[test]
    fn test_longest_valid_student_id_is_integer() {
        let mut record = record();
        record.student_id = "9".repeat(STUDENT_ID_MAX_DIGITS);
        let payload = SubmissionPayload::build(&record, String::new(), String::new(), at());
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["studentId"], json!(999_999_999_999_999_999u64));
    }

    #[test]
    fn test_unparsed_hours_serialize_as_null() {
        let mut record = record();
        record.service_hours = "abc".to_string();
        let payload = SubmissionPayload::build(&record, String::new(), String::new(), at());
        assert!(payload.service_hours.is_nan());
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body["serviceHours"].is_null());
    }
}
