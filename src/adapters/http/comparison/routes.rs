//! HTTP routes for comparison endpoints.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use super::handlers::{
    create_comparison, delete_comparison, get_comparison, list_comparisons,
    save_all_comparisons, update_comparison, ComparisonHandlers,
};

/// Creates the comparison router with all endpoints.
pub fn comparison_routes(handlers: ComparisonHandlers) -> Router {
    Router::new()
        .route("/:kind", get(list_comparisons))
        .route("/:kind", post(create_comparison))
        .route("/:kind", put(save_all_comparisons))
        .route("/:kind/:id", get(get_comparison))
        .route("/:kind/:id", patch(update_comparison))
        .route("/:kind/:id", delete(delete_comparison))
        .with_state(handlers)
}
