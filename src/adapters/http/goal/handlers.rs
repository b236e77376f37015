//! HTTP handlers for goal endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::services::GoalService;
use crate::domain::foundation::GoalId;

use super::dto::{CreateGoalRequest, GoalResponse, UpdateGoalRequest};

/// Shared state for goal handlers.
#[derive(Clone)]
pub struct GoalHandlers {
    service: Arc<GoalService>,
}

impl GoalHandlers {
    pub fn new(service: Arc<GoalService>) -> Self {
        Self { service }
    }
}

/// GET /api/goals - List all goals
pub async fn list_goals(State(handlers): State<GoalHandlers>) -> Response {
    let goals = handlers.service.list().await;
    let response: Vec<GoalResponse> = goals.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/goals/:id - Get one goal
pub async fn get_goal(
    State(handlers): State<GoalHandlers>,
    Path(goal_id): Path<String>,
) -> Response {
    let goal_id = match goal_id.parse::<GoalId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid goal ID")),
            )
                .into_response()
        }
    };

    match handlers.service.get(&goal_id).await {
        Some(goal) => (StatusCode::OK, Json(GoalResponse::from(goal))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Goal", &goal_id.to_string())),
        )
            .into_response(),
    }
}

/// POST /api/goals - Create a goal
pub async fn create_goal(
    State(handlers): State<GoalHandlers>,
    Json(req): Json<CreateGoalRequest>,
) -> Response {
    match handlers.service.create(req.into()).await {
        Ok(goal) => (StatusCode::CREATED, Json(GoalResponse::from(goal))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PATCH /api/goals/:id - Partially update a goal
pub async fn update_goal(
    State(handlers): State<GoalHandlers>,
    Path(goal_id): Path<String>,
    Json(req): Json<UpdateGoalRequest>,
) -> Response {
    let goal_id = match goal_id.parse::<GoalId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid goal ID")),
            )
                .into_response()
        }
    };

    match handlers.service.update(&goal_id, req.into()).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Goal", &goal_id.to_string())),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/goals/:id - Delete a goal
pub async fn delete_goal(
    State(handlers): State<GoalHandlers>,
    Path(goal_id): Path<String>,
) -> Response {
    let goal_id = match goal_id.parse::<GoalId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid goal ID")),
            )
                .into_response()
        }
    };

    match handlers.service.delete(&goal_id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Goal", &goal_id.to_string())),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}
