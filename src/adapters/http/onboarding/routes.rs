//! HTTP routes for onboarding wizard endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    abandon_wizard, add_competitor, advance_wizard, get_wizard, remove_competitor,
    retreat_wizard, set_company, set_preferences, set_product, set_terms, start_wizard,
    submit_wizard, update_competitor, OnboardingHandlers,
};

/// Creates the onboarding router with all endpoints.
pub fn onboarding_routes(handlers: OnboardingHandlers) -> Router {
    Router::new()
        .route("/", post(start_wizard))
        .route("/:id", get(get_wizard))
        .route("/:id", delete(abandon_wizard))
        .route("/:id/company", put(set_company))
        .route("/:id/product", put(set_product))
        .route("/:id/competitors", post(add_competitor))
        .route("/:id/competitors/:index", put(update_competitor))
        .route("/:id/competitors/:index", delete(remove_competitor))
        .route("/:id/preferences", put(set_preferences))
        .route("/:id/terms", put(set_terms))
        .route("/:id/next", post(advance_wizard))
        .route("/:id/back", post(retreat_wizard))
        .route("/:id/submit", post(submit_wizard))
        .with_state(handlers)
}
