//! Submission gateway port - the onboarding webhook.
//!
//! The wizard's single external effect: POST the full form to a fixed
//! URL and hand back the named output field from the JSON response.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::onboarding::OnboardingForm;

/// Errors from the onboarding submission webhook.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The endpoint answered with a non-2xx status.
    #[error("Submission failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed (DNS, connect, timeout).
    #[error("Submission transport error: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// User-facing message; HTTP failures keep the status code visible.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Gateway port for the onboarding submission.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Submits the full form. On success returns the extracted output
    /// string (already defaulted when the response had no output field).
    async fn submit(&self, form: &OnboardingForm) -> Result<String, SubmissionError>;
}
