// File: src/webhook.rs
// Purpose: Deliver the trip request to the configured webhook

use crate::config::WebhookConfig;
use crate::snapshot::TripRequest;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Optional acknowledgement body returned by the webhook
///
/// The endpoint may answer with `{ "emailSent": bool }`, an empty body, or
/// something that is not JSON at all; everything but an explicit
/// `emailSent: false` counts as sent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAck {
    #[serde(default)]
    pub email_sent: Option<bool>,
}

/// Delivery failure surfaced to the controller
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Endpoint answered outside the 2xx range
    #[error("request failed: {0}")]
    Status(reqwest::StatusCode),

    /// Connection, DNS, TLS, or timeout failure
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// JSON POST client for the itinerary webhook
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(config: &WebhookConfig) -> Result<Self, WebhookError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    /// POST the payload and read the optional acknowledgement
    ///
    /// A non-JSON or empty body on a successful status is not an error; the
    /// ack degrades to its default.
    pub async fn send(&self, payload: &TripRequest) -> Result<SubmissionAck, WebhookError> {
        let response = self.http.post(&self.url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status(status));
        }

        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_parses_email_sent() {
        let ack: SubmissionAck = serde_json::from_str(r#"{"emailSent": false}"#).unwrap();
        assert_eq!(ack.email_sent, Some(false));

        let ack: SubmissionAck = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.email_sent, None);
    }

    #[test]
    fn test_ack_ignores_unknown_fields() {
        let ack: SubmissionAck =
            serde_json::from_str(r#"{"emailSent": true, "itineraryId": 7}"#).unwrap();
        assert_eq!(ack.email_sent, Some(true));
    }

    #[test]
    fn test_garbage_body_degrades_to_default() {
        let ack: SubmissionAck = serde_json::from_str("not json").unwrap_or_default();
        assert_eq!(ack, SubmissionAck::default());
    }
}
