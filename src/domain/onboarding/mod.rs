//! Onboarding wizard domain - the linear multi-step form state machine.

mod errors;
mod form;
mod steps;
mod wizard;

pub use errors::OnboardingError;
pub use form::{
    AnalysisPreferences, CompanyInfo, CompetitorEntry, OnboardingForm, ProductInfo, StepValidation,
};
pub use steps::{OnboardingStep, StepSequence};
pub use wizard::{OnboardingWizard, SubmissionPhase};
