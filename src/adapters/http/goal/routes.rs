//! HTTP routes for goal endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{
    create_goal, delete_goal, get_goal, list_goals, update_goal, GoalHandlers,
};

/// Creates the goal router with all endpoints.
pub fn goal_routes(handlers: GoalHandlers) -> Router {
    Router::new()
        .route("/", get(list_goals))
        .route("/", post(create_goal))
        .route("/:id", get(get_goal))
        .route("/:id", patch(update_goal))
        .route("/:id", delete(delete_goal))
        .with_state(handlers)
}
