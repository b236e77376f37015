//! StepSequence - Centralized ordering logic for onboarding steps.
//!
//! The onboarding wizard progresses through 6 steps. This module
//! consolidates all ordering logic into a single location so navigation
//! rules are never duplicated across the codebase.
//!
//! # Step Order
//!
//! 1. Company → 2. Product → 3. Competitors → 4. Preferences →
//! 5. Review → 6. Response

use serde::{Deserialize, Serialize};

/// One step of the onboarding wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Company information (name, industry, business type, size).
    Company,
    /// Product information (category, type, target market, key features).
    Product,
    /// Competitor entries (name + website each).
    Competitors,
    /// Analysis preferences (metrics, recommendation types, frequency).
    Preferences,
    /// Review and terms agreement; submission fires from here.
    Review,
    /// Displays the submission response. Terminal.
    Response,
}

/// Central location for step ordering logic.
///
/// All navigation-related queries should go through this type.
pub struct StepSequence;

impl StepSequence {
    /// The canonical order of onboarding steps.
    pub const ORDER: [OnboardingStep; 6] = [
        OnboardingStep::Company,
        OnboardingStep::Product,
        OnboardingStep::Competitors,
        OnboardingStep::Preferences,
        OnboardingStep::Review,
        OnboardingStep::Response,
    ];

    /// Returns all steps in order.
    pub fn all() -> &'static [OnboardingStep; 6] {
        &Self::ORDER
    }

    /// Returns the 0-based index of a step in the sequence.
    #[inline]
    pub fn order_index(step: OnboardingStep) -> usize {
        Self::ORDER
            .iter()
            .position(|&s| s == step)
            .expect("All OnboardingStep variants must be in ORDER")
    }

    /// Returns the 1-based display number of a step (1..6).
    pub fn number(step: OnboardingStep) -> u8 {
        Self::order_index(step) as u8 + 1
    }

    /// Returns the next step in the sequence, or None if at the end.
    pub fn next(step: OnboardingStep) -> Option<OnboardingStep> {
        let idx = Self::order_index(step);
        Self::ORDER.get(idx + 1).copied()
    }

    /// Returns the previous step in the sequence, or None if at the start.
    pub fn previous(step: OnboardingStep) -> Option<OnboardingStep> {
        let idx = Self::order_index(step);
        if idx > 0 {
            Self::ORDER.get(idx - 1).copied()
        } else {
            None
        }
    }

    /// Returns the first step in the sequence.
    pub fn first() -> OnboardingStep {
        Self::ORDER[0]
    }

    /// Returns the last step in the sequence.
    pub fn last() -> OnboardingStep {
        Self::ORDER[Self::ORDER.len() - 1]
    }

    /// Returns true if this is the first step in the sequence.
    pub fn is_first(step: OnboardingStep) -> bool {
        step == Self::first()
    }

    /// Returns true if this is the last step in the sequence.
    pub fn is_last(step: OnboardingStep) -> bool {
        step == Self::last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_contains_all_six_steps() {
        assert_eq!(StepSequence::ORDER.len(), 6);
    }

    #[test]
    fn numbers_run_from_one_to_six() {
        assert_eq!(StepSequence::number(OnboardingStep::Company), 1);
        assert_eq!(StepSequence::number(OnboardingStep::Product), 2);
        assert_eq!(StepSequence::number(OnboardingStep::Competitors), 3);
        assert_eq!(StepSequence::number(OnboardingStep::Preferences), 4);
        assert_eq!(StepSequence::number(OnboardingStep::Review), 5);
        assert_eq!(StepSequence::number(OnboardingStep::Response), 6);
    }

    #[test]
    fn next_returns_subsequent_step() {
        assert_eq!(
            StepSequence::next(OnboardingStep::Company),
            Some(OnboardingStep::Product)
        );
        assert_eq!(
            StepSequence::next(OnboardingStep::Review),
            Some(OnboardingStep::Response)
        );
    }

    #[test]
    fn next_returns_none_for_last_step() {
        assert_eq!(StepSequence::next(OnboardingStep::Response), None);
    }

    #[test]
    fn previous_returns_preceding_step() {
        assert_eq!(
            StepSequence::previous(OnboardingStep::Product),
            Some(OnboardingStep::Company)
        );
        assert_eq!(
            StepSequence::previous(OnboardingStep::Response),
            Some(OnboardingStep::Review)
        );
    }

    #[test]
    fn previous_returns_none_for_first_step() {
        assert_eq!(StepSequence::previous(OnboardingStep::Company), None);
    }

    #[test]
    fn first_and_last_are_company_and_response() {
        assert_eq!(StepSequence::first(), OnboardingStep::Company);
        assert_eq!(StepSequence::last(), OnboardingStep::Response);
        assert!(StepSequence::is_first(OnboardingStep::Company));
        assert!(StepSequence::is_last(OnboardingStep::Response));
        assert!(!StepSequence::is_last(OnboardingStep::Review));
    }

    #[test]
    fn next_and_previous_are_inverses() {
        for step in StepSequence::all() {
            if let Some(next) = StepSequence::next(*step) {
                assert_eq!(StepSequence::previous(next), Some(*step));
            }
        }
    }

    #[test]
    fn step_serializes_to_snake_case() {
        let json = serde_json::to_string(&OnboardingStep::Competitors).unwrap();
        assert_eq!(json, "\"competitors\"");
    }
}
