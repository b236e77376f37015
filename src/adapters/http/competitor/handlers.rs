//! HTTP handlers for competitor endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::services::CompetitorService;
use crate::domain::foundation::CompetitorId;

use super::dto::{CompetitorResponse, CreateCompetitorRequest, UpdateCompetitorRequest};

/// Shared state for competitor handlers.
#[derive(Clone)]
pub struct CompetitorHandlers {
    service: Arc<CompetitorService>,
}

impl CompetitorHandlers {
    pub fn new(service: Arc<CompetitorService>) -> Self {
        Self { service }
    }
}

fn parse_id(raw: &str) -> Result<CompetitorId, Response> {
    raw.parse::<CompetitorId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid competitor ID")),
        )
            .into_response()
    })
}

/// GET /api/competitors - List all competitors
pub async fn list_competitors(State(handlers): State<CompetitorHandlers>) -> Response {
    let competitors = handlers.service.list().await;
    let response: Vec<CompetitorResponse> = competitors.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/competitors/:id - Get one competitor
pub async fn get_competitor(
    State(handlers): State<CompetitorHandlers>,
    Path(competitor_id): Path<String>,
) -> Response {
    let competitor_id = match parse_id(&competitor_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.get(&competitor_id).await {
        Some(competitor) => {
            (StatusCode::OK, Json(CompetitorResponse::from(competitor))).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Competitor", &competitor_id.to_string())),
        )
            .into_response(),
    }
}

/// POST /api/competitors - Create a competitor
pub async fn create_competitor(
    State(handlers): State<CompetitorHandlers>,
    Json(req): Json<CreateCompetitorRequest>,
) -> Response {
    match handlers.service.create(req.into()).await {
        Ok(competitor) => {
            (StatusCode::CREATED, Json(CompetitorResponse::from(competitor))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// PATCH /api/competitors/:id - Partially update a competitor
pub async fn update_competitor(
    State(handlers): State<CompetitorHandlers>,
    Path(competitor_id): Path<String>,
    Json(req): Json<UpdateCompetitorRequest>,
) -> Response {
    let competitor_id = match parse_id(&competitor_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.update(&competitor_id, req.into()).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Competitor", &competitor_id.to_string())),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/competitors/:id - Delete a competitor
pub async fn delete_competitor(
    State(handlers): State<CompetitorHandlers>,
    Path(competitor_id): Path<String>,
) -> Response {
    let competitor_id = match parse_id(&competitor_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.delete(&competitor_id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Competitor", &competitor_id.to_string())),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}
