//! Competitor service - cached reads, propagating mutations.
//!
//! Same policy as goals: best-effort reads, mutations propagate so the
//! UI can notify the user.

use std::sync::Arc;

use crate::application::cache::{ResourceCache, ResourceKey};
use crate::domain::foundation::{CompetitorId, DomainError};
use crate::domain::resources::{Competitor, CompetitorDraft, CompetitorPatch};
use crate::ports::CompetitorRepository;

/// Service for the competitors resource.
pub struct CompetitorService {
    repository: Arc<dyn CompetitorRepository>,
    cache: Arc<ResourceCache>,
}

impl CompetitorService {
    pub fn new(repository: Arc<dyn CompetitorRepository>, cache: Arc<ResourceCache>) -> Self {
        Self { repository, cache }
    }

    /// Lists all competitors, serving the cached list when fresh.
    ///
    /// Never fails: remote errors are logged and yield an empty list.
    pub async fn list(&self) -> Vec<Competitor> {
        if let Some(cached) = self.cache.competitors().get() {
            return cached;
        }
        match self.repository.list().await {
            Ok(competitors) => {
                self.cache.competitors().put(competitors.clone());
                competitors
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list competitors, returning empty list");
                Vec::new()
            }
        }
    }

    /// Fetches one competitor. Absent on not-found and on remote failure.
    pub async fn get(&self, id: &CompetitorId) -> Option<Competitor> {
        match self.repository.find_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, competitor_id = %id, "Failed to fetch competitor");
                None
            }
        }
    }

    /// Creates a competitor and invalidates the cached list.
    ///
    /// # Errors
    ///
    /// Propagates the repository error for user-facing notification.
    pub async fn create(&self, draft: CompetitorDraft) -> Result<Competitor, DomainError> {
        let competitor = self.repository.insert(draft).await?;
        self.cache.invalidate(ResourceKey::Competitors);
        Ok(competitor)
    }

    /// Applies a partial patch and invalidates the cached list.
    ///
    /// # Errors
    ///
    /// Propagates the repository error for user-facing notification.
    pub async fn update(
        &self,
        id: &CompetitorId,
        patch: CompetitorPatch,
    ) -> Result<bool, DomainError> {
        let modified = self.repository.update(id, patch).await?;
        self.cache.invalidate(ResourceKey::Competitors);
        Ok(modified)
    }

    /// Deletes a competitor and invalidates the cached list.
    ///
    /// # Errors
    ///
    /// Propagates the repository error for user-facing notification.
    pub async fn delete(&self, id: &CompetitorId) -> Result<bool, DomainError> {
        let removed = self.repository.delete(id).await?;
        self.cache.invalidate(ResourceKey::Competitors);
        Ok(removed)
    }
}
