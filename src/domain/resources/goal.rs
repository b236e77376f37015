//! Goal records - progress-tracked business goals.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GoalId, Percentage, Timestamp};

/// A tracked business goal.
///
/// Optional fields default rather than fail: a record missing description
/// or due date still renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Completion progress, bounded 0-100.
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
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A goal awaiting creation: no identifier or timestamps yet, the store
/// assigns both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDraft {
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

/// Partial update for a goal. Only the set fields change; applying a
/// patch refreshes `updated_at` and touches nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub progress: Option<Percentage>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

impl GoalPatch {
    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.progress.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.category.is_none()
    }
}

impl Goal {
    /// Materializes a draft into a stored record with a fresh id and
    /// timestamps.
    pub fn from_draft(draft: GoalDraft) -> Self {
        let now = Timestamp::now();
        Self {
            id: GoalId::new(),
            title: draft.title,
            description: draft.description,
            progress: draft.progress,
            due_date: draft.due_date,
            status: draft.status,
            priority: draft.priority,
            category: draft.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial patch, refreshing `updated_at`.
    pub fn apply(&mut self, patch: GoalPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        self.updated_at = Timestamp::now();
    }
}
