//! Trait abstraction for the record sink to enable mocking in tests

use crate::error::SinkError;
use crate::state::SubmissionPayload;
use async_trait::async_trait;

/// Destination that stores submitted service records.
///
/// Dispatch is response-blind: `Ok` means only that the request left the
/// client without a transport failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Send one payload
    async fn dispatch(&self, payload: &SubmissionPayload) -> Result<(), SinkError>;
}
