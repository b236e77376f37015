//! Standard error response body and status mapping for the REST API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::onboarding::OnboardingError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Maps a domain error onto an HTTP response.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::GoalNotFound
        | ErrorCode::CompetitorNotFound
        | ErrorCode::TeamMemberNotFound
        | ErrorCode::ComparisonNotFound
        | ErrorCode::WizardNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::StepIncomplete => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InvalidStateTransition
        | ErrorCode::SubmissionInFlight
        | ErrorCode::AlreadySubmitted => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::WebhookError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let body = ErrorResponse::from_code(error.code, error.message);
    (status, Json(body)).into_response()
}

/// Maps an onboarding error onto an HTTP response.
pub fn onboarding_error_response(error: OnboardingError) -> Response {
    let status = match &error {
        OnboardingError::NotFound(_) => StatusCode::NOT_FOUND,
        OnboardingError::StepIncomplete { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        OnboardingError::AtFirstStep
        | OnboardingError::AtTerminalStep
        | OnboardingError::SubmitRequired
        | OnboardingError::NotOnReview
        | OnboardingError::SubmissionInFlight
        | OnboardingError::AlreadySubmitted
        | OnboardingError::InvalidSubmissionState(_) => StatusCode::CONFLICT,
    };

    let details = match &error {
        OnboardingError::StepIncomplete { reasons, .. } => {
            Some(serde_json::json!({ "reasons": reasons }))
        }
        _ => None,
    };

    let mut body = ErrorResponse::from_code(error.code(), error.message());
    body.details = details;
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::onboarding::OnboardingStep;

    #[test]
    fn not_found_codes_map_to_404() {
        let error = DomainError::new(ErrorCode::GoalNotFound, "Goal not found");
        let response = domain_error_response(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_codes_map_to_400() {
        let error = DomainError::validation("title", "cannot be empty");
        let response = domain_error_response(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_map_to_500() {
        let error = DomainError::new(ErrorCode::DatabaseError, "connection reset");
        let response = domain_error_response(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn incomplete_step_maps_to_422() {
        let error = OnboardingError::step_incomplete(
            OnboardingStep::Company,
            vec!["company_name is required".to_string()],
        );
        let response = onboarding_error_response(error);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn double_submit_maps_to_409() {
        let response = onboarding_error_response(OnboardingError::SubmissionInFlight);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
