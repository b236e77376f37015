//! Onboarding-specific error types.

use crate::domain::foundation::{ErrorCode, WizardId};

use super::steps::OnboardingStep;

/// Onboarding wizard errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingError {
    /// Wizard instance was not found in the registry.
    NotFound(WizardId),
    /// The current step's guard did not pass.
    StepIncomplete {
        step: OnboardingStep,
        reasons: Vec<String>,
    },
    /// Back is not available on the first step.
    AtFirstStep,
    /// Next is not available on the terminal step.
    AtTerminalStep,
    /// Advancing past Review happens through submission, not Next.
    SubmitRequired,
    /// Submit is only fireable from the Review step.
    NotOnReview,
    /// A submission is already in flight; no double submit.
    SubmissionInFlight,
    /// The wizard already submitted successfully.
    AlreadySubmitted,
    /// Submission lifecycle was driven out of order.
    InvalidSubmissionState(String),
}

impl OnboardingError {
    pub fn step_incomplete(step: OnboardingStep, reasons: Vec<String>) -> Self {
        OnboardingError::StepIncomplete { step, reasons }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            OnboardingError::NotFound(_) => ErrorCode::WizardNotFound,
            OnboardingError::StepIncomplete { .. } => ErrorCode::StepIncomplete,
            OnboardingError::AtFirstStep
            | OnboardingError::AtTerminalStep
            | OnboardingError::SubmitRequired
            | OnboardingError::NotOnReview => ErrorCode::InvalidStateTransition,
            OnboardingError::SubmissionInFlight => ErrorCode::SubmissionInFlight,
            OnboardingError::AlreadySubmitted => ErrorCode::AlreadySubmitted,
            OnboardingError::InvalidSubmissionState(_) => ErrorCode::InvalidStateTransition,
        }
    }

    pub fn message(&self) -> String {
        match self {
            OnboardingError::NotFound(id) => format!("Wizard not found: {}", id),
            OnboardingError::StepIncomplete { step, reasons } => {
                format!("Step {:?} is incomplete: {}", step, reasons.join("; "))
            }
            OnboardingError::AtFirstStep => "Already on the first step".to_string(),
            OnboardingError::AtTerminalStep => "Already on the final step".to_string(),
            OnboardingError::SubmitRequired => {
                "Review is completed by submitting, not by Next".to_string()
            }
            OnboardingError::NotOnReview => "Submit is only available on Review".to_string(),
            OnboardingError::SubmissionInFlight => {
                "A submission is already in progress".to_string()
            }
            OnboardingError::AlreadySubmitted => "Wizard already submitted".to_string(),
            OnboardingError::InvalidSubmissionState(msg) => {
                format!("Invalid submission state: {}", msg)
            }
        }
    }
}

impl std::fmt::Display for OnboardingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OnboardingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_incomplete_lists_reasons() {
        let err = OnboardingError::step_incomplete(
            OnboardingStep::Company,
            vec!["company_name is required".to_string()],
        );
        assert!(err.message().contains("company_name is required"));
        assert_eq!(err.code(), ErrorCode::StepIncomplete);
    }

    #[test]
    fn not_found_carries_wizard_id() {
        let id = WizardId::new();
        let err = OnboardingError::NotFound(id);
        assert!(err.message().contains(&id.to_string()));
    }
}
