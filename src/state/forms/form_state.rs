//! Form controller: field state, validation and the submission lifecycle

use super::field::Field;
use super::payload::SubmissionPayload;
use super::record::ServiceRecord;
use super::validation::{
    validate_record, SignatureStatus, ValidationErrors, PROVIDER_SIGNATURE_REQUIRED,
    STUDENT_SIGNATURE_REQUIRED,
};
use crate::error::SinkError;
use crate::signature::SignatureSurface;
use crate::sink::RecordSink;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// The one message shown for any dispatch failure
pub const SUBMIT_FAILED_MESSAGE: &str = "Submission failed. Please try again later.";

/// Who a signature surface belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signer {
    Student,
    Provider,
}

impl Signer {
    pub fn field(self) -> Field {
        match self {
            Signer::Student => Field::StudentSignature,
            Signer::Provider => Field::ProviderSignature,
        }
    }

    fn missing_message(self) -> &'static str {
        match self {
            Signer::Student => STUDENT_SIGNATURE_REQUIRED,
            Signer::Provider => PROVIDER_SIGNATURE_REQUIRED,
        }
    }
}

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Editing,
    EditingWithErrors,
    Submitting,
    Succeeded,
    TransportError,
}

/// A payload that passed validation and is ready to dispatch
#[derive(Debug, Clone)]
pub struct PreparedSubmission {
    /// Local id used only to correlate log lines
    pub id: Uuid,
    pub payload: SubmissionPayload,
}

/// Holds one service record being entered, plus its two signature surfaces
#[derive(Debug)]
pub struct FormController<S> {
    record: ServiceRecord,
    errors: ValidationErrors,
    submitting: bool,
    succeeded: bool,
    submit_error: Option<String>,
    student_pad: S,
    provider_pad: S,
}

impl<S: SignatureSurface> FormController<S> {
    pub fn new(student_pad: S, provider_pad: S) -> Self {
        Self {
            record: ServiceRecord::empty(),
            errors: ValidationErrors::new(),
            submitting: false,
            succeeded: false,
            submit_error: None,
            student_pad,
            provider_pad,
        }
    }

    pub fn record(&self) -> &ServiceRecord {
        &self.record
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn has_succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Dismiss the transport error banner without touching fields
    pub fn dismiss_submit_error(&mut self) {
        self.submit_error = None;
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.succeeded {
            SubmissionPhase::Succeeded
        } else if self.submitting {
            SubmissionPhase::Submitting
        } else if self.submit_error.is_some() {
            SubmissionPhase::TransportError
        } else if !self.errors.is_empty() {
            SubmissionPhase::EditingWithErrors
        } else {
            SubmissionPhase::Editing
        }
    }

    pub fn pad(&self, signer: Signer) -> &S {
        match signer {
            Signer::Student => &self.student_pad,
            Signer::Provider => &self.provider_pad,
        }
    }

    pub fn pad_mut(&mut self, signer: Signer) -> &mut S {
        match signer {
            Signer::Student => &mut self.student_pad,
            Signer::Provider => &mut self.provider_pad,
        }
    }

    // Setters. None of them validate or clear errors.

    pub fn set_last_name(&mut self, value: String) {
        self.record.last_name = value;
    }

    pub fn set_first_name(&mut self, value: String) {
        self.record.first_name = value;
    }

    pub fn set_student_id(&mut self, value: String) {
        self.record.student_id = value;
    }

    pub fn set_school_email(&mut self, value: String) {
        self.record.school_email = value;
    }

    pub fn set_service_hours(&mut self, value: String) {
        self.record.service_hours = value;
    }

    pub fn set_service_description(&mut self, value: String) {
        self.record.service_description = value;
    }

    pub fn set_contact_person(&mut self, value: String) {
        self.record.contact_person = value;
    }

    pub fn set_opportunity_name(&mut self, value: String) {
        self.record.opportunity_name = value;
    }

    pub fn set_fabrication_agreement(&mut self, agreed: bool) {
        self.record.fabrication_agreement = agreed;
    }

    /// Add a service date; duplicates are ignored
    pub fn add_service_date(&mut self, date: NaiveDate) -> bool {
        self.record.service_dates.add(date)
    }

    /// Remove a service date; missing dates are ignored
    pub fn remove_service_date(&mut self, date: NaiveDate) -> bool {
        self.record.service_dates.remove(date)
    }

    /// Set a text field by identifier. Returns false for non-text fields.
    pub fn set_text(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::LastName => self.set_last_name(value),
            Field::FirstName => self.set_first_name(value),
            Field::StudentId => self.set_student_id(value),
            Field::SchoolEmail => self.set_school_email(value),
            Field::ServiceHours => self.set_service_hours(value),
            Field::ServiceDescription => self.set_service_description(value),
            Field::ContactPerson => self.set_contact_person(value),
            _ => return false,
        }
        true
    }

    /// Current value of a text field
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::LastName => &self.record.last_name,
            Field::FirstName => &self.record.first_name,
            Field::StudentId => &self.record.student_id,
            Field::SchoolEmail => &self.record.school_email,
            Field::ServiceHours => &self.record.service_hours,
            Field::ServiceDescription => &self.record.service_description,
            Field::ContactPerson => &self.record.contact_person,
            _ => return None,
        };
        Some(value)
    }

    /// Check every field and both signature surfaces.
    ///
    /// Replaces the stored error map; returns true when it is empty.
    pub fn validate(&mut self) -> bool {
        let signatures = SignatureStatus {
            student_signed: !self.student_pad.is_empty(),
            provider_signed: !self.provider_pad.is_empty(),
        };
        self.errors = validate_record(&self.record, signatures);
        if !self.errors.is_empty() {
            tracing::debug!(failing = self.errors.len(), "validation failed");
        }
        self.errors.is_empty()
    }

    fn capture(&mut self, signer: Signer) -> Option<String> {
        let url = self
            .pad(signer)
            .export_svg_data_url()
            .filter(|url| !url.is_empty());
        if url.is_none() {
            self.errors.insert(signer.field(), signer.missing_message());
        }
        url
    }

    /// Validate, capture both signatures and build the payload.
    ///
    /// On success the form is marked as submitting and the caller must hand
    /// the dispatch result back through `finish_submission`.
    pub fn prepare_submission(&mut self, now: DateTime<Utc>) -> Option<PreparedSubmission> {
        if self.submitting {
            tracing::warn!("submission already in progress");
            return None;
        }

        self.submit_error = None;

        if !self.validate() {
            return None;
        }

        // Capture after validation so a stroke drawn in between is included.
        let student = self.capture(Signer::Student);
        let provider = self.capture(Signer::Provider);
        let (Some(student), Some(provider)) = (student, provider) else {
            return None;
        };

        self.record.student_signature = Some(student.clone());
        self.record.provider_signature = Some(provider.clone());

        let payload = SubmissionPayload::build(&self.record, student, provider, now);
        self.submitting = true;

        Some(PreparedSubmission {
            id: Uuid::new_v4(),
            payload,
        })
    }

    /// Record the outcome of a dispatch started by `prepare_submission`
    pub fn finish_submission(&mut self, id: Uuid, result: Result<(), SinkError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                tracing::info!(submission_id = %id, "service record dispatched");
                self.succeeded = true;
            }
            Err(err) => {
                tracing::error!(submission_id = %id, error = %err, "service record dispatch failed");
                self.submit_error = Some(SUBMIT_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Validate and dispatch in one step. Returns true when the record was sent.
    #[allow(dead_code)]
    pub async fn submit<K: RecordSink + ?Sized>(&mut self, sink: &K) -> bool {
        let Some(prepared) = self.prepare_submission(Utc::now()) else {
            return false;
        };
        let result = sink.dispatch(&prepared.payload).await;
        self.finish_submission(prepared.id, result);
        self.succeeded
    }

    /// Restore the empty template and clear both signature surfaces
    pub fn reset(&mut self) {
        self.succeeded = false;
        self.submitting = false;
        self.submit_error = None;
        self.record = ServiceRecord::empty();
        self.errors = ValidationErrors::new();
        self.student_pad.clear();
        self.provider_pad.clear();
    }

    /// Clear one signature surface. The error map is left as is.
    pub fn clear_signature(&mut self, signer: Signer) {
        self.pad_mut(signer).clear();
    }
}
