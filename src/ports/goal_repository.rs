//! Goal repository port.
//!
//! Defines the contract for persisting and retrieving goal records.
//! Implementations handle the actual database operations.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GoalId};
use crate::domain::resources::{Goal, GoalDraft, GoalPatch};

/// Repository port for goal persistence.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// List all goals, most recently created first.
    async fn list(&self) -> Result<Vec<Goal>, DomainError>;

    /// Find a goal by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError>;

    /// Insert a draft, assigning id and timestamps. Returns the stored
    /// record.
    async fn insert(&self, draft: GoalDraft) -> Result<Goal, DomainError>;

    /// Apply a partial patch, refreshing `updated_at`. Returns whether a
    /// record was modified.
    async fn update(&self, id: &GoalId, patch: GoalPatch) -> Result<bool, DomainError>;

    /// Delete by identifier. Returns whether a record was removed.
    async fn delete(&self, id: &GoalId) -> Result<bool, DomainError>;
}
