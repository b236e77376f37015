//! HTTP DTOs for goal endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::resources::{Goal, GoalDraft, GoalPatch};

/// Request to create a goal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoalRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub progress: Percentage,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub category: String,
}

impl From<CreateGoalRequest> for GoalDraft {
    fn from(req: CreateGoalRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            progress: req.progress,
            due_date: req.due_date,
            status: req.status,
            priority: req.priority,
            category: req.category,
        }
    }
}

/// Partial update request; only the present fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGoalRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub progress: Option<Percentage>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

impl From<UpdateGoalRequest> for GoalPatch {
    fn from(req: UpdateGoalRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            progress: req.progress,
            due_date: req.due_date,
            status: req.status,
            priority: req.priority,
            category: req.category,
        }
    }
}

/// Goal representation in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct GoalResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub progress: Percentage,
    pub due_date: String,
    pub status: String,
    pub priority: String,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id.to_string(),
            title: goal.title,
            description: goal.description,
            progress: goal.progress,
            due_date: goal.due_date,
            status: goal.status,
            priority: goal.priority,
            category: goal.category,
            created_at: goal.created_at.to_rfc3339(),
            updated_at: goal.updated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_deserializes_with_defaults() {
        let json = r#"{"title": "Increase Market Share"}"#;
        let req: CreateGoalRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Increase Market Share");
        assert_eq!(req.progress.value(), 0);
        assert_eq!(req.status, "");
    }

    #[test]
    fn create_request_rejects_out_of_range_progress() {
        let json = r#"{"title": "Bad", "progress": 130}"#;
        assert!(serde_json::from_str::<CreateGoalRequest>(json).is_err());
    }

    #[test]
    fn update_request_keeps_absent_fields_unset() {
        let json = r#"{"progress": 65}"#;
        let req: UpdateGoalRequest = serde_json::from_str(json).unwrap();
        let patch: GoalPatch = req.into();
        assert_eq!(patch.progress.map(|p| p.value()), Some(65));
        assert!(patch.title.is_none());
        assert!(patch.status.is_none());
    }

    #[test]
    fn goal_response_conversion_formats_timestamps() {
        let goal = Goal::from_draft(GoalDraft {
            title: "Test".to_string(),
            ..Default::default()
        });
        let response: GoalResponse = goal.clone().into();
        assert_eq!(response.id, goal.id.to_string());
        assert!(response.created_at.contains('T'));
    }
}
