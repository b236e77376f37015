//! HTTP DTOs for team member endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::resources::{TeamMember, TeamMemberDraft, TeamMemberPatch};

/// Request to create a team member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub projects: u32,
    #[serde(default)]
    pub projects_completed: u32,
    #[serde(default)]
    pub tasks: u32,
    #[serde(default)]
    pub tasks_completed: u32,
    #[serde(default)]
    pub performance: Percentage,
    #[serde(default)]
    pub availability: String,
}

impl From<CreateTeamMemberRequest> for TeamMemberDraft {
    fn from(req: CreateTeamMemberRequest) -> Self {
        Self {
            name: req.name,
            position: req.position,
            email: req.email,
            phone: req.phone,
            avatar: req.avatar,
            projects: req.projects,
            projects_completed: req.projects_completed,
            tasks: req.tasks,
            tasks_completed: req.tasks_completed,
            performance: req.performance,
            availability: req.availability,
        }
    }
}

/// Partial update request; only the present fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeamMemberRequest {
    pub name: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub projects: Option<u32>,
    pub projects_completed: Option<u32>,
    pub tasks: Option<u32>,
    pub tasks_completed: Option<u32>,
    pub performance: Option<Percentage>,
    pub availability: Option<String>,
}

impl From<UpdateTeamMemberRequest> for TeamMemberPatch {
    fn from(req: UpdateTeamMemberRequest) -> Self {
        Self {
            name: req.name,
            position: req.position,
            email: req.email,
            phone: req.phone,
            avatar: req.avatar,
            projects: req.projects,
            projects_completed: req.projects_completed,
            tasks: req.tasks,
            tasks_completed: req.tasks_completed,
            performance: req.performance,
            availability: req.availability,
        }
    }
}

/// Team member representation in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberResponse {
    pub id: String,
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub projects: u32,
    pub projects_completed: u32,
    pub tasks: u32,
    pub tasks_completed: u32,
    pub performance: Percentage,
    pub availability: String,
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name,
            position: member.position,
            email: member.email,
            phone: member.phone,
            avatar: member.avatar,
            projects: member.projects,
            projects_completed: member.projects_completed,
            tasks: member.tasks,
            tasks_completed: member.tasks_completed,
            performance: member.performance,
            availability: member.availability,
        }
    }
}
