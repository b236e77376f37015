//! Goal service - cached reads, propagating mutations.
//!
//! Reads are best-effort: a remote failure is logged and swallowed into
//! the empty sentinel so list views render rather than crash. Mutations
//! propagate their error to the caller so the UI can show a toast and
//! keep the dialog open.

use std::sync::Arc;

use crate::application::cache::{ResourceCache, ResourceKey};
use crate::domain::foundation::{DomainError, GoalId};
use crate::domain::resources::{Goal, GoalDraft, GoalPatch};
use crate::ports::GoalRepository;

/// Service for the goals resource.
pub struct GoalService {
    repository: Arc<dyn GoalRepository>,
    cache: Arc<ResourceCache>,
}

impl GoalService {
    pub fn new(repository: Arc<dyn GoalRepository>, cache: Arc<ResourceCache>) -> Self {
        Self { repository, cache }
    }

    /// Lists all goals, serving the cached list when fresh.
    ///
    /// Never fails: remote errors are logged and yield an empty list.
    pub async fn list(&self) -> Vec<Goal> {
        if let Some(cached) = self.cache.goals().get() {
            return cached;
        }
        match self.repository.list().await {
            Ok(goals) => {
                self.cache.goals().put(goals.clone());
                goals
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list goals, returning empty list");
                Vec::new()
            }
        }
    }

    /// Fetches one goal. Absent on not-found and on remote failure.
    pub async fn get(&self, id: &GoalId) -> Option<Goal> {
        match self.repository.find_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, goal_id = %id, "Failed to fetch goal");
                None
            }
        }
    }

    /// Creates a goal and invalidates the cached list.
    ///
    /// # Errors
    ///
    /// Propagates the repository error for user-facing notification.
    pub async fn create(&self, draft: GoalDraft) -> Result<Goal, DomainError> {
        let goal = self.repository.insert(draft).await?;
        self.cache.invalidate(ResourceKey::Goals);
        Ok(goal)
    }

    /// Applies a partial patch and invalidates the cached list.
    ///
    /// Returns whether a record was modified.
    ///
    /// # Errors
    ///
    /// Propagates the repository error for user-facing notification.
    pub async fn update(&self, id: &GoalId, patch: GoalPatch) -> Result<bool, DomainError> {
        let modified = self.repository.update(id, patch).await?;
        self.cache.invalidate(ResourceKey::Goals);
        Ok(modified)
    }

    /// Deletes a goal and invalidates the cached list.
    ///
    /// Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Propagates the repository error for user-facing notification.
    pub async fn delete(&self, id: &GoalId) -> Result<bool, DomainError> {
        let removed = self.repository.delete(id).await?;
        self.cache.invalidate(ResourceKey::Goals);
        Ok(removed)
    }
}
