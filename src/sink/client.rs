//! HTTP client for the spreadsheet-backed record endpoint
//!
//! The endpoint does not return a readable response, so the client posts the
//! JSON body and discards whatever comes back.

use super::traits::RecordSink;
use crate::error::SinkError;
use crate::state::SubmissionPayload;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Sink that POSTs each record as JSON to a fixed endpoint
#[derive(Debug, Clone)]
pub struct HttpSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecordSink for HttpSink {
    async fn dispatch(&self, payload: &SubmissionPayload) -> Result<(), SinkError> {
        let body = serde_json::to_vec(payload)?;

        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "dispatching record");

        // Status and body are not inspected.
        let _ = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(())
    }
}
