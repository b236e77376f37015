//! Team member records.
//!
//! The team_members table carries no timestamps; list ordering is by name.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, TeamMemberId};

/// A team member with workload counters and a performance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: TeamMemberId,
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

/// A team member awaiting creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberDraft {
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

/// Partial update for a team member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberPatch {
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

impl TeamMember {
    /// Materializes a draft into a stored record with a fresh id.
    pub fn from_draft(draft: TeamMemberDraft) -> Self {
        Self {
            id: TeamMemberId::new(),
            name: draft.name,
            position: draft.position,
            email: draft.email,
            phone: draft.phone,
            avatar: draft.avatar,
            projects: draft.projects,
            projects_completed: draft.projects_completed,
            tasks: draft.tasks,
            tasks_completed: draft.tasks_completed,
            performance: draft.performance,
            availability: draft.availability,
        }
    }

    /// Applies a partial patch.
    pub fn apply(&mut self, patch: TeamMemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(projects) = patch.projects {
            self.projects = projects;
        }
        if let Some(projects_completed) = patch.projects_completed {
            self.projects_completed = projects_completed;
        }
        if let Some(tasks) = patch.tasks {
            self.tasks = tasks;
        }
        if let Some(tasks_completed) = patch.tasks_completed {
            self.tasks_completed = tasks_completed;
        }
        if let Some(performance) = patch.performance {
            self.performance = performance;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
    }
}
