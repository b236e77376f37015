//! HTTP DTOs for onboarding wizard endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::WizardId;
use crate::domain::onboarding::{
    AnalysisPreferences, CompanyInfo, CompetitorEntry, OnboardingForm, OnboardingStep,
    OnboardingWizard, ProductInfo, StepSequence, SubmissionPhase,
};

/// Request to replace the company step data.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub company_size: String,
}

impl From<CompanyRequest> for CompanyInfo {
    fn from(req: CompanyRequest) -> Self {
        Self {
            company_name: req.company_name,
            industry: req.industry,
            business_type: req.business_type,
            company_size: req.company_size,
        }
    }
}

/// Request to replace the product step data.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub product_category: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub target_market: String,
    #[serde(default)]
    pub key_features: Vec<String>,
}

impl From<ProductRequest> for ProductInfo {
    fn from(req: ProductRequest) -> Self {
        Self {
            product_category: req.product_category,
            product_type: req.product_type,
            target_market: req.target_market,
            key_features: req.key_features,
        }
    }
}

/// Request carrying one competitor entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompetitorEntryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub website: String,
}

impl From<CompetitorEntryRequest> for CompetitorEntry {
    fn from(req: CompetitorEntryRequest) -> Self {
        Self {
            name: req.name,
            website: req.website,
        }
    }
}

/// Request to replace the preferences step data.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesRequest {
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default)]
    pub recommendation_types: Vec<String>,
    #[serde(default)]
    pub analysis_frequency: String,
}

impl From<PreferencesRequest> for AnalysisPreferences {
    fn from(req: PreferencesRequest) -> Self {
        Self {
            metrics: req.metrics,
            recommendation_types: req.recommendation_types,
            analysis_frequency: req.analysis_frequency,
        }
    }
}

/// Request to set the terms-agreed flag.
#[derive(Debug, Clone, Deserialize)]
pub struct TermsRequest {
    pub agreed: bool,
}

/// Submission state in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub phase: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn phase_name(phase: SubmissionPhase) -> &'static str {
    match phase {
        SubmissionPhase::NotStarted => "not_started",
        SubmissionPhase::InFlight => "in_flight",
        SubmissionPhase::Succeeded => "succeeded",
        SubmissionPhase::Failed => "failed",
    }
}

/// Full wizard state in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct WizardResponse {
    pub id: String,
    pub current_step: OnboardingStep,
    pub step_number: u8,
    pub form: OnboardingForm,
    /// Whether the continue control should be enabled.
    pub can_advance: bool,
    /// Guard failures for the current step, empty when it passes.
    pub validation_reasons: Vec<String>,
    pub submission: SubmissionView,
}

impl WizardResponse {
    /// Snapshots a wizard into a response body.
    pub fn from_wizard(id: WizardId, wizard: &OnboardingWizard) -> Self {
        let validation = wizard.current_validation();
        Self {
            id: id.to_string(),
            current_step: wizard.current_step(),
            step_number: StepSequence::number(wizard.current_step()),
            form: wizard.form().clone(),
            can_advance: validation.is_valid() && !wizard.is_submitting(),
            validation_reasons: validation.reasons().to_vec(),
            submission: SubmissionView {
                phase: phase_name(wizard.phase()),
                output: wizard.output().map(String::from),
                error: wizard.last_error().map(String::from),
            },
        }
    }
}
