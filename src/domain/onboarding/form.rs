//! Onboarding form state and per-step validation guards.
//!
//! The form is a single accumulating record with one sub-struct per wizard
//! step. Guards are explicit predicates over the current form state; a step
//! can only be advanced past when its guard evaluates Valid. Guards never
//! throw: the invalid case carries the reasons so the UI can disable the
//! continue control and explain why.

use serde::{Deserialize, Serialize};

use super::steps::OnboardingStep;

/// Company information collected on step 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub company_name: String,
    pub industry: String,
    pub business_type: String,
    pub company_size: String,
}

/// Product information collected on step 2.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub product_category: String,
    pub product_type: String,
    pub target_market: String,
    /// Selected key features; at least one is required to advance.
    pub key_features: Vec<String>,
}

/// One competitor entry on step 3. Name and website are both required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorEntry {
    pub name: String,
    pub website: String,
}

impl CompetitorEntry {
    /// Returns true when both required fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.website.trim().is_empty()
    }
}

/// Analysis preferences collected on step 4.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPreferences {
    pub metrics: Vec<String>,
    pub recommendation_types: Vec<String>,
    pub analysis_frequency: String,
}

/// The single accumulating form record shared by all wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingForm {
    pub company: CompanyInfo,
    pub product: ProductInfo,
    pub competitors: Vec<CompetitorEntry>,
    pub preferences: AnalysisPreferences,
    pub terms_agreed: bool,
}

/// Result of evaluating a step guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepValidation {
    Valid,
    Invalid(Vec<String>),
}

impl StepValidation {
    /// Returns true if the guard passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, StepValidation::Valid)
    }

    /// Returns the failure reasons, empty when valid.
    pub fn reasons(&self) -> &[String] {
        match self {
            StepValidation::Valid => &[],
            StepValidation::Invalid(reasons) => reasons,
        }
    }

    fn from_reasons(reasons: Vec<String>) -> Self {
        if reasons.is_empty() {
            StepValidation::Valid
        } else {
            StepValidation::Invalid(reasons)
        }
    }
}

impl OnboardingForm {
    /// Evaluates the guard for the given step against the current form
    /// state. Response has no guard: it is terminal and always Valid.
    pub fn validate_step(&self, step: OnboardingStep) -> StepValidation {
        match step {
            OnboardingStep::Company => self.validate_company(),
            OnboardingStep::Product => self.validate_product(),
            OnboardingStep::Competitors => self.validate_competitors(),
            OnboardingStep::Preferences => self.validate_preferences(),
            OnboardingStep::Review => self.validate_review(),
            OnboardingStep::Response => StepValidation::Valid,
        }
    }

    fn validate_company(&self) -> StepValidation {
        let mut reasons = Vec::new();
        require_filled(&mut reasons, "company_name", &self.company.company_name);
        require_filled(&mut reasons, "industry", &self.company.industry);
        require_filled(&mut reasons, "business_type", &self.company.business_type);
        require_filled(&mut reasons, "company_size", &self.company.company_size);
        StepValidation::from_reasons(reasons)
    }

    fn validate_product(&self) -> StepValidation {
        let mut reasons = Vec::new();
        require_filled(&mut reasons, "product_category", &self.product.product_category);
        require_filled(&mut reasons, "product_type", &self.product.product_type);
        require_filled(&mut reasons, "target_market", &self.product.target_market);
        if self.product.key_features.is_empty() {
            reasons.push("at least one key feature must be selected".to_string());
        }
        StepValidation::from_reasons(reasons)
    }

    fn validate_competitors(&self) -> StepValidation {
        let mut reasons = Vec::new();
        if self.competitors.is_empty() {
            reasons.push("at least one competitor is required".to_string());
        }
        for (idx, entry) in self.competitors.iter().enumerate() {
            if !entry.is_complete() {
                reasons.push(format!("competitor {} needs a name and website", idx + 1));
            }
        }
        StepValidation::from_reasons(reasons)
    }

    fn validate_preferences(&self) -> StepValidation {
        let mut reasons = Vec::new();
        if self.preferences.metrics.is_empty() {
            reasons.push("at least one metric must be selected".to_string());
        }
        if self.preferences.recommendation_types.is_empty() {
            reasons.push("at least one recommendation type must be selected".to_string());
        }
        require_filled(
            &mut reasons,
            "analysis_frequency",
            &self.preferences.analysis_frequency,
        );
        StepValidation::from_reasons(reasons)
    }

    fn validate_review(&self) -> StepValidation {
        if self.terms_agreed {
            StepValidation::Valid
        } else {
            StepValidation::Invalid(vec!["terms must be agreed to".to_string()])
        }
    }
}

fn require_filled(reasons: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        reasons.push(format!("{} is required", field));
    }
}
