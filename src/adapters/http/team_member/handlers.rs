//! HTTP handlers for team member endpoints.
//!
//! The team member service swallows mutation errors to sentinels, so
//! these handlers only distinguish "worked" from "did not".

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::services::TeamMemberService;
use crate::domain::foundation::TeamMemberId;

use super::dto::{CreateTeamMemberRequest, TeamMemberResponse, UpdateTeamMemberRequest};

/// Shared state for team member handlers.
#[derive(Clone)]
pub struct TeamMemberHandlers {
    service: Arc<TeamMemberService>,
}

impl TeamMemberHandlers {
    pub fn new(service: Arc<TeamMemberService>) -> Self {
        Self { service }
    }
}

fn parse_id(raw: &str) -> Result<TeamMemberId, Response> {
    raw.parse::<TeamMemberId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid team member ID")),
        )
            .into_response()
    })
}

/// GET /api/team-members - List all team members
pub async fn list_team_members(State(handlers): State<TeamMemberHandlers>) -> Response {
    let members = handlers.service.list().await;
    let response: Vec<TeamMemberResponse> = members.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/team-members/:id - Get one team member
pub async fn get_team_member(
    State(handlers): State<TeamMemberHandlers>,
    Path(member_id): Path<String>,
) -> Response {
    let member_id = match parse_id(&member_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.get(&member_id).await {
        Some(member) => (StatusCode::OK, Json(TeamMemberResponse::from(member))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Team member", &member_id.to_string())),
        )
            .into_response(),
    }
}

/// POST /api/team-members - Create a team member
pub async fn create_team_member(
    State(handlers): State<TeamMemberHandlers>,
    Json(req): Json<CreateTeamMemberRequest>,
) -> Response {
    match handlers.service.create(req.into()).await {
        Some(member) => {
            (StatusCode::CREATED, Json(TeamMemberResponse::from(member))).into_response()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("Team member could not be created")),
        )
            .into_response(),
    }
}

/// PATCH /api/team-members/:id - Partially update a team member
pub async fn update_team_member(
    State(handlers): State<TeamMemberHandlers>,
    Path(member_id): Path<String>,
    Json(req): Json<UpdateTeamMemberRequest>,
) -> Response {
    let member_id = match parse_id(&member_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if handlers.service.update(&member_id, req.into()).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Team member", &member_id.to_string())),
        )
            .into_response()
    }
}

/// DELETE /api/team-members/:id - Delete a team member
pub async fn delete_team_member(
    State(handlers): State<TeamMemberHandlers>,
    Path(member_id): Path<String>,
) -> Response {
    let member_id = match parse_id(&member_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if handlers.service.delete(&member_id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Team member", &member_id.to_string())),
        )
            .into_response()
    }
}
