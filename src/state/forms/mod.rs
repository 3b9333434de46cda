//! Form domain layer
//!
//! Pure state for the service-record form: field identifiers, the record
//! itself, validation rules, payload construction and the controller that
//! ties them to the signature surfaces and the sink.

mod field;
mod form_state;
mod payload;
mod record;
mod validation;

pub use field::Field;
pub use form_state::{FormController, Signer, SubmissionPhase};
pub use payload::SubmissionPayload;
pub use record::{parse_service_date, DATE_FORMAT, OPPORTUNITIES};

#[cfg(test)]
pub use form_state::SUBMIT_FAILED_MESSAGE;
#[cfg(test)]
pub use record::ServiceRecord;
