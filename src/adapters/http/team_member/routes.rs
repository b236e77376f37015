//! HTTP routes for team member endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{
    create_team_member, delete_team_member, get_team_member, list_team_members,
    update_team_member, TeamMemberHandlers,
};

/// Creates the team member router with all endpoints.
pub fn team_member_routes(handlers: TeamMemberHandlers) -> Router {
    Router::new()
        .route("/", get(list_team_members))
        .route("/", post(create_team_member))
        .route("/:id", get(get_team_member))
        .route("/:id", patch(update_team_member))
        .route("/:id", delete(delete_team_member))
        .with_state(handlers)
}
