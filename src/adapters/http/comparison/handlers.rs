//! HTTP handlers for comparison endpoints.
//!
//! Every route is parameterized by the comparison kind path segment
//! ("feature" or "attribute"). The comparison service swallows mutation
//! errors to sentinels, so handlers only distinguish "worked" from
//! "did not".

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::services::ComparisonService;
use crate::domain::foundation::ComparisonId;
use crate::domain::resources::ComparisonKind;

use super::dto::{ComparisonResponse, ComparisonRowRequest, UpdateComparisonRequest};

/// Shared state for comparison handlers.
#[derive(Clone)]
pub struct ComparisonHandlers {
    service: Arc<ComparisonService>,
}

impl ComparisonHandlers {
    pub fn new(service: Arc<ComparisonService>) -> Self {
        Self { service }
    }
}

fn parse_kind(raw: &str) -> Result<ComparisonKind, Response> {
    raw.parse::<ComparisonKind>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(
                "Comparison kind must be 'feature' or 'attribute'",
            )),
        )
            .into_response()
    })
}

fn parse_id(raw: &str) -> Result<ComparisonId, Response> {
    raw.parse::<ComparisonId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid comparison ID")),
        )
            .into_response()
    })
}

/// GET /api/comparisons/:kind - List all rows of one kind
pub async fn list_comparisons(
    State(handlers): State<ComparisonHandlers>,
    Path(kind): Path<String>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    let rows = handlers.service.list(kind).await;
    let response: Vec<ComparisonResponse> = rows.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/comparisons/:kind/:id - Get one row
pub async fn get_comparison(
    State(handlers): State<ComparisonHandlers>,
    Path((kind, id)): Path<(String, String)>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.get(kind, &id).await {
        Some(row) => (StatusCode::OK, Json(ComparisonResponse::from(row))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Comparison", &id.to_string())),
        )
            .into_response(),
    }
}

/// POST /api/comparisons/:kind - Create one row
pub async fn create_comparison(
    State(handlers): State<ComparisonHandlers>,
    Path(kind): Path<String>,
    Json(req): Json<ComparisonRowRequest>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    match handlers.service.create(kind, req.into()).await {
        Some(row) => (StatusCode::CREATED, Json(ComparisonResponse::from(row))).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("Comparison could not be created")),
        )
            .into_response(),
    }
}

/// PUT /api/comparisons/:kind - Replace the whole collection
pub async fn save_all_comparisons(
    State(handlers): State<ComparisonHandlers>,
    Path(kind): Path<String>,
    Json(rows): Json<Vec<ComparisonRowRequest>>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    let drafts = rows.into_iter().map(Into::into).collect();
    if handlers.service.save_all(kind, drafts).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("Replace-all save failed")),
        )
            .into_response()
    }
}

/// PATCH /api/comparisons/:kind/:id - Partially update one row
pub async fn update_comparison(
    State(handlers): State<ComparisonHandlers>,
    Path((kind, id)): Path<(String, String)>,
    Json(req): Json<UpdateComparisonRequest>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if handlers.service.update(kind, &id, req.into()).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Comparison", &id.to_string())),
        )
            .into_response()
    }
}

/// DELETE /api/comparisons/:kind/:id - Delete one row
pub async fn delete_comparison(
    State(handlers): State<ComparisonHandlers>,
    Path((kind, id)): Path<(String, String)>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if handlers.service.delete(kind, &id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Comparison", &id.to_string())),
        )
            .into_response()
    }
}
