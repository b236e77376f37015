//! Webhook submission client - reqwest implementation of
//! SubmissionGateway.
//!
//! One POST to a fixed URL with the entire form as the JSON body. The
//! success path extracts the `output` field from the JSON response; any
//! other response shape yields a fixed fallback string and still counts
//! as success. Non-2xx statuses and transport failures surface as
//! submission errors with no automatic retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::onboarding::OnboardingForm;
use crate::ports::{SubmissionError, SubmissionGateway};

/// Fallback shown when a successful response carries no output field.
pub const NO_OUTPUT_FALLBACK: &str = "No output data received";

/// Configuration for the webhook client.
#[derive(Debug, Clone)]
pub struct WebhookClientConfig {
    /// Endpoint receiving the submission.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl WebhookClientConfig {
    /// Creates a configuration with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Webhook implementation of the submission gateway.
pub struct WebhookSubmissionClient {
    config: WebhookClientConfig,
    client: Client,
}

impl WebhookSubmissionClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: WebhookClientConfig) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl SubmissionGateway for WebhookSubmissionClient {
    async fn submit(&self, form: &OnboardingForm) -> Result<String, SubmissionError> {
        let response = self
            .client
            .post(&self.config.url)
            .json(form)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SubmissionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(extract_output(&body))
    }
}

/// Pulls the `output` field out of a successful response body.
///
/// Anything other than a JSON object with a string `output` yields the
/// fallback: the submission still succeeded, there is just nothing to
/// show.
fn extract_output(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("output").cloned())
        .and_then(|output| match output {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| NO_OUTPUT_FALLBACK.to_string())
}
