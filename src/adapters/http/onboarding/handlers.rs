//! HTTP handlers for onboarding wizard endpoints.
//!
//! Wizards live in the in-memory registry; every handler resolves the
//! wizard by path id and works on it under its own lock. The submit
//! handler holds that lock across the webhook call, which is exactly the
//! single-outstanding-submission discipline the wizard requires.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::Mutex;

use crate::adapters::http::error::{onboarding_error_response, ErrorResponse};
use crate::application::SubmitOnboarding;
use crate::domain::foundation::WizardId;
use crate::domain::onboarding::{OnboardingError, OnboardingWizard};

use super::dto::{
    CompanyRequest, CompetitorEntryRequest, PreferencesRequest, ProductRequest, TermsRequest,
    WizardResponse,
};
use super::registry::WizardRegistry;

/// Shared state for onboarding handlers.
#[derive(Clone)]
pub struct OnboardingHandlers {
    registry: Arc<WizardRegistry>,
    submit: Arc<SubmitOnboarding>,
}

impl OnboardingHandlers {
    pub fn new(registry: Arc<WizardRegistry>, submit: Arc<SubmitOnboarding>) -> Self {
        Self { registry, submit }
    }

    fn resolve(&self, raw_id: &str) -> Result<(WizardId, Arc<Mutex<OnboardingWizard>>), Response> {
        let id = raw_id.parse::<WizardId>().map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid wizard ID")),
            )
                .into_response()
        })?;

        match self.registry.get(&id) {
            Some(wizard) => Ok((id, wizard)),
            None => Err(onboarding_error_response(OnboardingError::NotFound(id))),
        }
    }
}

/// POST /api/onboarding - Start a fresh wizard
pub async fn start_wizard(State(handlers): State<OnboardingHandlers>) -> Response {
    let id = handlers.registry.create();
    let wizard = handlers
        .registry
        .get(&id)
        .expect("Wizard must exist right after creation");
    let guard = wizard.lock().await;
    (StatusCode::CREATED, Json(WizardResponse::from_wizard(id, &guard))).into_response()
}

/// GET /api/onboarding/:id - Snapshot the wizard state
pub async fn get_wizard(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let (id, wizard) = match handlers.resolve(&wizard_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let guard = wizard.lock().await;
    (StatusCode::OK, Json(WizardResponse::from_wizard(id, &guard))).into_response()
}

/// DELETE /api/onboarding/:id - Abandon the wizard
pub async fn abandon_wizard(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    match wizard_id.parse::<WizardId>() {
        Ok(id) if handlers.registry.remove(&id) => StatusCode::NO_CONTENT.into_response(),
        Ok(id) => onboarding_error_response(OnboardingError::NotFound(id)),
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid wizard ID")),
        )
            .into_response(),
    }
}

/// PUT /api/onboarding/:id/company - Replace company data
pub async fn set_company(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
    Json(req): Json<CompanyRequest>,
) -> Response {
    let (id, wizard) = match handlers.resolve(&wizard_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let mut guard = wizard.lock().await;
    guard.set_company(req.into());
    (StatusCode::OK, Json(WizardResponse::from_wizard(id, &guard))).into_response()
}

/// PUT /api/onboarding/:id/product - Replace product data
pub async fn set_product(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
    Json(req): Json<ProductRequest>,
) -> Response {
    let (id, wizard) = match handlers.resolve(&wizard_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let mut guard = wizard.lock().await;
    guard.set_product(req.into());
    (StatusCode::OK, Json(WizardResponse::from_wizard(id, &guard))).into_response()
}

/// POST /api/onboarding/:id/competitors - Append a competitor entry
pub async fn add_competitor(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
    Json(req): Json<CompetitorEntryRequest>,
) -> Response {
    let (id, wizard) = match handlers.resolve(&wizard_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let mut guard = wizard.lock().await;
    guard.add_competitor(req.into());
    (StatusCode::OK, Json(WizardResponse::from_wizard(id, &guard))).into_response()
}

/// PUT /api/onboarding/:id/competitors/:index - Replace one entry
pub async fn update_competitor(
    State(handlers): State<OnboardingHandlers>,
    Path((wizard_id, index)): Path<(String, usize)>,
    Json(req): Json<CompetitorEntryRequest>,
) -> Response {
    let (id, wizard) = match handlers.resolve(&wizard_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let mut guard = wizard.lock().await;
    guard.update_competitor(index, req.into());
    (StatusCode::OK, Json(WizardResponse::from_wizard(id, &guard))).into_response()
}

/// DELETE /api/onboarding/:id/competitors/:index - Remove one entry
///
/// Removing below the floor of one entry is a no-op; the returned state
/// shows whether anything changed.
pub async fn remove_competitor(
    State(handlers): State<OnboardingHandlers>,
    Path((wizard_id, index)): Path<(String, usize)>,
) -> Response {
    let (id, wizard) = match handlers.resolve(&wizard_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let mut guard = wizard.lock().await;
    guard.remove_competitor(index);
    (StatusCode::OK, Json(WizardResponse::from_wizard(id, &guard))).into_response()
}

/// PUT /api/onboarding/:id/preferences - Replace preferences data
pub async fn set_preferences(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
    Json(req): Json<PreferencesRequest>,
) -> Response {
    let (id, wizard) = match handlers.resolve(&wizard_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let mut guard = wizard.lock().await;
    guard.set_preferences(req.into());
    (StatusCode::OK, Json(WizardResponse::from_wizard(id, &guard))).into_response()
}

/// PUT /api/onboarding/:id/terms - Set the terms-agreed flag
pub async fn set_terms(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
    Json(req): Json<TermsRequest>,
) -> Response {
    let (id, wizard) = match handlers.resolve(&wizard_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let mut guard = wizard.lock().await;
    guard.set_terms_agreed(req.agreed);
    (StatusCode::OK, Json(WizardResponse::from_wizard(id, &guard))).into_response()
}

/// POST /api/onboarding/:id/next - Advance one step
pub async fn advance_wizard(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let (id, wizard) = match handlers.resolve(&wizard_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let mut guard = wizard.lock().await;
    match guard.advance() {
        Ok(_) => (StatusCode::OK, Json(WizardResponse::from_wizard(id, &guard))).into_response(),
        Err(e) => onboarding_error_response(e),
    }
}

/// POST /api/onboarding/:id/back - Retreat one step
pub async fn retreat_wizard(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let (id, wizard) = match handlers.resolve(&wizard_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let mut guard = wizard.lock().await;
    match guard.retreat() {
        Ok(_) => (StatusCode::OK, Json(WizardResponse::from_wizard(id, &guard))).into_response(),
        Err(e) => onboarding_error_response(e),
    }
}

/// POST /api/onboarding/:id/submit - Fire the submission
///
/// Success advances to Response; a webhook failure is reported in the
/// returned wizard state, not as an HTTP error, because the submission
/// attempt itself completed.
pub async fn submit_wizard(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let (id, wizard) = match handlers.resolve(&wizard_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let mut guard = wizard.lock().await;
    match handlers.submit.handle(&mut guard).await {
        Ok(_) => (StatusCode::OK, Json(WizardResponse::from_wizard(id, &guard))).into_response(),
        Err(e) => onboarding_error_response(e),
    }
}
