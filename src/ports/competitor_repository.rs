//! Competitor repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CompetitorId, DomainError};
use crate::domain::resources::{Competitor, CompetitorDraft, CompetitorPatch};

/// Repository port for competitor persistence.
#[async_trait]
pub trait CompetitorRepository: Send + Sync {
    /// List all competitors, most recently created first.
    async fn list(&self) -> Result<Vec<Competitor>, DomainError>;

    /// Find a competitor by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &CompetitorId) -> Result<Option<Competitor>, DomainError>;

    /// Insert a draft, assigning id and timestamps. Returns the stored
    /// record.
    async fn insert(&self, draft: CompetitorDraft) -> Result<Competitor, DomainError>;

    /// Apply a partial patch, refreshing `updated_at`. Returns whether a
    /// record was modified.
    async fn update(&self, id: &CompetitorId, patch: CompetitorPatch)
        -> Result<bool, DomainError>;

    /// Delete by identifier. Returns whether a record was removed.
    async fn delete(&self, id: &CompetitorId) -> Result<bool, DomainError>;
}
