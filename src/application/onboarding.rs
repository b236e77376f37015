//! SubmitOnboarding - drives the wizard's single external effect.
//!
//! Runs the submission lifecycle against the gateway: guard-checked
//! begin, one POST carrying the full form, then complete or fail. The
//! outcome lands in the wizard itself; a network failure is not an error
//! of this handler, it is recorded state the UI displays on Review.

use std::sync::Arc;

use crate::domain::onboarding::{OnboardingError, OnboardingWizard, SubmissionPhase};
use crate::ports::SubmissionGateway;

/// Handler for submitting a completed onboarding wizard.
pub struct SubmitOnboarding {
    gateway: Arc<dyn SubmissionGateway>,
}

impl SubmitOnboarding {
    pub fn new(gateway: Arc<dyn SubmissionGateway>) -> Self {
        Self { gateway }
    }

    /// Submits the wizard's form.
    ///
    /// On gateway success the wizard advances to Response with the
    /// extracted output; on gateway failure it stays on Review with the
    /// error message recorded and the form untouched. Either way the
    /// submission phase is resolved when this returns.
    ///
    /// # Errors
    ///
    /// Precondition failures only: wrong step, unmet Review guard,
    /// double submit, already submitted.
    pub async fn handle(&self, wizard: &mut OnboardingWizard) -> Result<SubmissionPhase, OnboardingError> {
        wizard.begin_submission()?;

        match self.gateway.submit(wizard.form()).await {
            Ok(output) => {
                wizard.complete_submission(output)?;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Onboarding submission failed");
                wizard.fail_submission(e.user_message())?;
            }
        }
        Ok(wizard.phase())
    }
}
