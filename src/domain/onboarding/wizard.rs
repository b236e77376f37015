//! Onboarding wizard aggregate.
//!
//! A strictly linear six-step form state machine. Navigation is monotonic
//! forward/back only: Next is gated by the current step's guard, Back is
//! unconditional, and the only way out of Review is a submission. The
//! wizard holds no persistent state; it lives in memory and is discarded
//! when abandoned.
//!
//! # Invariants
//!
//! - `current_step` only advances past a step whose guard evaluates Valid
//! - The competitor list never shrinks below one entry once populated
//! - Submission fires at most once concurrently (no double submit)
//! - A failed submission leaves the form untouched and re-submittable

use crate::domain::foundation::StateMachine;

use super::errors::OnboardingError;
use super::form::{
    AnalysisPreferences, CompanyInfo, CompetitorEntry, OnboardingForm, ProductInfo,
    StepValidation,
};
use super::steps::{OnboardingStep, StepSequence};

/// Lifecycle of the wizard's single outbound submission.
///
/// Failed submissions may be retried manually, so Failed loops back to
/// InFlight. Succeeded is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    NotStarted,
    InFlight,
    Succeeded,
    Failed,
}

impl StateMachine for SubmissionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, target),
            (NotStarted, InFlight) | (InFlight, Succeeded) | (InFlight, Failed) | (Failed, InFlight)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionPhase::*;
        match self {
            NotStarted => vec![InFlight],
            InFlight => vec![Succeeded, Failed],
            Failed => vec![InFlight],
            Succeeded => vec![],
        }
    }
}

/// Onboarding wizard - the linear multi-step form state machine.
pub struct OnboardingWizard {
    current_step: OnboardingStep,
    form: OnboardingForm,
    phase: SubmissionPhase,
    /// Output extracted from a successful submission response.
    output: Option<String>,
    /// Error message from the most recent failed submission.
    last_error: Option<String>,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    /// Creates a wizard on the first step with empty defaults.
    pub fn new() -> Self {
        Self {
            current_step: StepSequence::first(),
            form: OnboardingForm::default(),
            phase: SubmissionPhase::NotStarted,
            output: None,
            last_error: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the current step.
    pub fn current_step(&self) -> OnboardingStep {
        self.current_step
    }

    /// Returns the accumulated form state.
    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    /// Returns the submission phase.
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Returns the output of a successful submission.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Returns the error message of the most recent failed submission.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns true while a submission is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::InFlight
    }

    /// Evaluates the guard for the current step.
    ///
    /// The UI uses this to enable/disable the continue control; the same
    /// predicate gates `advance`, so the two can never disagree.
    pub fn current_validation(&self) -> StepValidation {
        self.form.validate_step(self.current_step)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Form mutation (the shared updater used by step components)
    // ─────────────────────────────────────────────────────────────────────

    /// Replaces the company info.
    pub fn set_company(&mut self, company: CompanyInfo) {
        self.form.company = company;
    }

    /// Replaces the product info.
    pub fn set_product(&mut self, product: ProductInfo) {
        self.form.product = product;
    }

    /// Replaces the analysis preferences.
    pub fn set_preferences(&mut self, preferences: AnalysisPreferences) {
        self.form.preferences = preferences;
    }

    /// Sets the terms-agreed flag.
    pub fn set_terms_agreed(&mut self, agreed: bool) {
        self.form.terms_agreed = agreed;
    }

    /// Appends a competitor entry.
    pub fn add_competitor(&mut self, entry: CompetitorEntry) {
        self.form.competitors.push(entry);
    }

    /// Replaces the competitor entry at `index`. Out-of-range is a no-op.
    pub fn update_competitor(&mut self, index: usize, entry: CompetitorEntry) {
        if let Some(slot) = self.form.competitors.get_mut(index) {
            *slot = entry;
        }
    }

    /// Removes the competitor entry at `index`.
    ///
    /// The list has a floor of one entry: removal when exactly one remains
    /// is a no-op, as is an out-of-range index. Returns whether an entry
    /// was removed.
    pub fn remove_competitor(&mut self, index: usize) -> bool {
        if self.form.competitors.len() <= 1 || index >= self.form.competitors.len() {
            return false;
        }
        self.form.competitors.remove(index);
        true
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Advances to the next step if the current step's guard holds.
    ///
    /// # Errors
    ///
    /// - `StepIncomplete` with the guard's reasons when the guard fails
    /// - `SubmitRequired` on Review (submission is the only exit)
    /// - `AtTerminalStep` on Response
    pub fn advance(&mut self) -> Result<OnboardingStep, OnboardingError> {
        match self.current_step {
            OnboardingStep::Review => return Err(OnboardingError::SubmitRequired),
            OnboardingStep::Response => return Err(OnboardingError::AtTerminalStep),
            _ => {}
        }

        match self.current_validation() {
            StepValidation::Valid => {
                // Guard held and we are not on Review/Response, so a next
                // step always exists.
                let next = StepSequence::next(self.current_step)
                    .ok_or(OnboardingError::AtTerminalStep)?;
                self.current_step = next;
                Ok(next)
            }
            StepValidation::Invalid(reasons) => {
                Err(OnboardingError::step_incomplete(self.current_step, reasons))
            }
        }
    }

    /// Retreats to the previous step. Unconditional for steps 2..6.
    ///
    /// # Errors
    ///
    /// - `AtFirstStep` on Company
    pub fn retreat(&mut self) -> Result<OnboardingStep, OnboardingError> {
        let previous =
            StepSequence::previous(self.current_step).ok_or(OnboardingError::AtFirstStep)?;
        self.current_step = previous;
        Ok(previous)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Submission lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Marks the submission as in flight.
    ///
    /// Only fireable from Review with a passing Review guard, and never
    /// while another submission is outstanding.
    ///
    /// # Errors
    ///
    /// - `NotOnReview` when fired from another step
    /// - `SubmissionInFlight` on double submit
    /// - `AlreadySubmitted` after a success
    /// - `StepIncomplete` when terms are not agreed
    pub fn begin_submission(&mut self) -> Result<(), OnboardingError> {
        if self.current_step != OnboardingStep::Review {
            return Err(OnboardingError::NotOnReview);
        }
        match self.phase {
            SubmissionPhase::InFlight => return Err(OnboardingError::SubmissionInFlight),
            SubmissionPhase::Succeeded => return Err(OnboardingError::AlreadySubmitted),
            SubmissionPhase::NotStarted | SubmissionPhase::Failed => {}
        }
        if let StepValidation::Invalid(reasons) = self.form.validate_step(OnboardingStep::Review) {
            return Err(OnboardingError::step_incomplete(OnboardingStep::Review, reasons));
        }

        self.phase = self
            .phase
            .transition_to(SubmissionPhase::InFlight)
            .map_err(|e| OnboardingError::InvalidSubmissionState(e.to_string()))?;
        Ok(())
    }

    /// Records a successful submission and advances to Response.
    ///
    /// # Errors
    ///
    /// - `InvalidSubmissionState` when no submission is in flight
    pub fn complete_submission(&mut self, output: String) -> Result<(), OnboardingError> {
        self.phase = self
            .phase
            .transition_to(SubmissionPhase::Succeeded)
            .map_err(|e| OnboardingError::InvalidSubmissionState(e.to_string()))?;
        self.output = Some(output);
        self.last_error = None;
        self.current_step = OnboardingStep::Response;
        Ok(())
    }

    /// Records a failed submission. The wizard stays on Review with the
    /// form untouched so the user can re-trigger Submit.
    ///
    /// # Errors
    ///
    /// - `InvalidSubmissionState` when no submission is in flight
    pub fn fail_submission(&mut self, message: String) -> Result<(), OnboardingError> {
        self.phase = self
            .phase
            .transition_to(SubmissionPhase::Failed)
            .map_err(|e| OnboardingError::InvalidSubmissionState(e.to_string()))?;
        self.last_error = Some(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_company() -> CompanyInfo {
        CompanyInfo {
            company_name: "Acme Analytics".to_string(),
            industry: "SaaS".to_string(),
            business_type: "B2B".to_string(),
            company_size: "11-50".to_string(),
        }
    }

    fn filled_product() -> ProductInfo {
        ProductInfo {
            product_category: "Business Intelligence".to_string(),
            product_type: "Dashboard".to_string(),
            target_market: "Mid-market".to_string(),
            key_features: vec!["Competitor tracking".to_string()],
        }
    }

    fn complete_entry(name: &str) -> CompetitorEntry {
        CompetitorEntry {
            name: name.to_string(),
            website: format!("https://{}.example", name.to_lowercase()),
        }
    }

    /// Drives a fresh wizard to the Review step with a fully valid form.
    fn wizard_at_review() -> OnboardingWizard {
        let mut wizard = OnboardingWizard::new();
        wizard.set_company(filled_company());
        wizard.advance().unwrap();
        wizard.set_product(filled_product());
        wizard.advance().unwrap();
        wizard.add_competitor(complete_entry("RivalCorp"));
        wizard.advance().unwrap();
        wizard.set_preferences(AnalysisPreferences {
            metrics: vec!["market_share".to_string()],
            recommendation_types: vec!["pricing".to_string()],
            analysis_frequency: "weekly".to_string(),
        });
        wizard.advance().unwrap();
        assert_eq!(wizard.current_step(), OnboardingStep::Review);
        wizard
    }

    #[test]
    fn new_wizard_starts_on_company_with_empty_form() {
        let wizard = OnboardingWizard::new();
        assert_eq!(wizard.current_step(), OnboardingStep::Company);
        assert_eq!(wizard.form().competitors.len(), 0);
        assert_eq!(wizard.phase(), SubmissionPhase::NotStarted);
    }

    #[test]
    fn advance_refuses_when_guard_fails() {
        let mut wizard = OnboardingWizard::new();
        let result = wizard.advance();
        assert!(matches!(
            result,
            Err(OnboardingError::StepIncomplete { step: OnboardingStep::Company, .. })
        ));
        assert_eq!(wizard.current_step(), OnboardingStep::Company);
    }

    #[test]
    fn advance_moves_forward_when_guard_holds() {
        let mut wizard = OnboardingWizard::new();
        wizard.set_company(filled_company());
        assert_eq!(wizard.advance().unwrap(), OnboardingStep::Product);
    }

    #[test]
    fn advance_errors_track_guard_reasons() {
        let mut wizard = OnboardingWizard::new();
        wizard.set_company(CompanyInfo {
            company_name: "Acme".to_string(),
            ..Default::default()
        });
        match wizard.advance() {
            Err(OnboardingError::StepIncomplete { reasons, .. }) => {
                assert_eq!(reasons.len(), 3);
            }
            other => panic!("Expected StepIncomplete, got {:?}", other),
        }
    }

    #[test]
    fn retreat_is_unconditional_from_later_steps() {
        let mut wizard = wizard_at_review();
        assert_eq!(wizard.retreat().unwrap(), OnboardingStep::Preferences);
        assert_eq!(wizard.retreat().unwrap(), OnboardingStep::Competitors);
        // Back works even when the step's own guard would now fail.
        wizard.form.competitors.clear();
        assert_eq!(wizard.retreat().unwrap(), OnboardingStep::Product);
    }

    #[test]
    fn retreat_refuses_on_first_step() {
        let mut wizard = OnboardingWizard::new();
        assert_eq!(wizard.retreat(), Err(OnboardingError::AtFirstStep));
    }

    #[test]
    fn remove_competitor_is_noop_at_floor_of_one() {
        let mut wizard = OnboardingWizard::new();
        wizard.add_competitor(complete_entry("OnlyOne"));
        assert!(!wizard.remove_competitor(0));
        assert_eq!(wizard.form().competitors.len(), 1);

        wizard.add_competitor(complete_entry("Second"));
        assert!(wizard.remove_competitor(1));
        assert_eq!(wizard.form().competitors.len(), 1);
    }

    #[test]
    fn remove_competitor_out_of_range_is_noop() {
        let mut wizard = OnboardingWizard::new();
        wizard.add_competitor(complete_entry("A"));
        wizard.add_competitor(complete_entry("B"));
        assert!(!wizard.remove_competitor(5));
        assert_eq!(wizard.form().competitors.len(), 2);
    }

    #[test]
    fn begin_submission_requires_review_step() {
        let mut wizard = OnboardingWizard::new();
        assert_eq!(wizard.begin_submission(), Err(OnboardingError::NotOnReview));
    }

    #[test]
    fn begin_submission_requires_terms_agreed() {
        let mut wizard = wizard_at_review();
        let result = wizard.begin_submission();
        assert!(matches!(
            result,
            Err(OnboardingError::StepIncomplete { step: OnboardingStep::Review, .. })
        ));
        assert_eq!(wizard.phase(), SubmissionPhase::NotStarted);
    }

    #[test]
    fn begin_submission_refuses_double_submit() {
        let mut wizard = wizard_at_review();
        wizard.set_terms_agreed(true);
        wizard.begin_submission().unwrap();
        assert_eq!(
            wizard.begin_submission(),
            Err(OnboardingError::SubmissionInFlight)
        );
    }

    #[test]
    fn successful_submission_advances_to_response() {
        let mut wizard = wizard_at_review();
        wizard.set_terms_agreed(true);
        wizard.begin_submission().unwrap();
        wizard.complete_submission("Your analysis is ready".to_string()).unwrap();

        assert_eq!(wizard.current_step(), OnboardingStep::Response);
        assert_eq!(wizard.output(), Some("Your analysis is ready"));
        assert_eq!(wizard.phase(), SubmissionPhase::Succeeded);
    }

    #[test]
    fn failed_submission_stays_on_review_and_is_resubmittable() {
        let mut wizard = wizard_at_review();
        wizard.set_terms_agreed(true);
        let form_before = wizard.form().clone();

        wizard.begin_submission().unwrap();
        wizard.fail_submission("Submission failed with status 500".to_string()).unwrap();

        assert_eq!(wizard.current_step(), OnboardingStep::Review);
        assert_eq!(wizard.last_error(), Some("Submission failed with status 500"));
        assert_eq!(wizard.form(), &form_before);

        // Manual retry is allowed after a failure.
        wizard.begin_submission().unwrap();
        assert_eq!(wizard.phase(), SubmissionPhase::InFlight);
    }

    #[test]
    fn no_resubmit_after_success() {
        let mut wizard = wizard_at_review();
        wizard.set_terms_agreed(true);
        wizard.begin_submission().unwrap();
        wizard.complete_submission("done".to_string()).unwrap();

        // Back to Review is allowed, but submitting again is not.
        wizard.retreat().unwrap();
        assert_eq!(
            wizard.begin_submission(),
            Err(OnboardingError::AlreadySubmitted)
        );
    }

    #[test]
    fn complete_without_begin_is_rejected() {
        let mut wizard = wizard_at_review();
        let result = wizard.complete_submission("out of order".to_string());
        assert!(matches!(
            result,
            Err(OnboardingError::InvalidSubmissionState(_))
        ));
    }

    #[test]
    fn advance_from_review_requires_submission() {
        let mut wizard = wizard_at_review();
        wizard.set_terms_agreed(true);
        assert_eq!(wizard.advance(), Err(OnboardingError::SubmitRequired));
    }

    #[test]
    fn submission_phase_machine_has_expected_shape() {
        use SubmissionPhase::*;
        assert!(NotStarted.can_transition_to(&InFlight));
        assert!(InFlight.can_transition_to(&Succeeded));
        assert!(InFlight.can_transition_to(&Failed));
        assert!(Failed.can_transition_to(&InFlight));
        assert!(!NotStarted.can_transition_to(&Succeeded));
        assert!(Succeeded.is_terminal());
    }
}
