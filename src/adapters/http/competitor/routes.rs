//! HTTP routes for competitor endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{
    create_competitor, delete_competitor, get_competitor, list_competitors, update_competitor,
    CompetitorHandlers,
};

/// Creates the competitor router with all endpoints.
pub fn competitor_routes(handlers: CompetitorHandlers) -> Router {
    Router::new()
        .route("/", get(list_competitors))
        .route("/", post(create_competitor))
        .route("/:id", get(get_competitor))
        .route("/:id", patch(update_competitor))
        .route("/:id", delete(delete_competitor))
        .with_state(handlers)
}
