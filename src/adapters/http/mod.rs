//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own adapter module; `api_router` assembles them
//! under /api.

pub mod comparison;
pub mod competitor;
pub mod error;
pub mod goal;
pub mod onboarding;
pub mod team_member;

pub use comparison::{comparison_routes, ComparisonHandlers};
pub use competitor::{competitor_routes, CompetitorHandlers};
pub use error::ErrorResponse;
pub use goal::{goal_routes, GoalHandlers};
pub use onboarding::{onboarding_routes, OnboardingHandlers, WizardRegistry};
pub use team_member::{team_member_routes, TeamMemberHandlers};

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;

/// GET /api/health - Liveness probe
async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Assembles the full API router.
pub fn api_router(
    goals: GoalHandlers,
    competitors: CompetitorHandlers,
    team_members: TeamMemberHandlers,
    comparisons: ComparisonHandlers,
    onboarding: OnboardingHandlers,
) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .nest("/goals", goal_routes(goals))
        .nest("/competitors", competitor_routes(competitors))
        .nest("/team-members", team_member_routes(team_members))
        .nest("/comparisons", comparison_routes(comparisons))
        .nest("/onboarding", onboarding_routes(onboarding));

    Router::new().nest("/api", api)
}
