//! Comparison repository port.
//!
//! Feature and attribute comparisons share one contract, parameterized by
//! `ComparisonKind`. Beyond the standard CRUD operations this port
//! carries the bulk replace-all save used by the comparison editors.

use async_trait::async_trait;

use crate::domain::foundation::{ComparisonId, DomainError};
use crate::domain::resources::{Comparison, ComparisonDraft, ComparisonKind, ComparisonPatch};

/// Repository port for comparison persistence.
#[async_trait]
pub trait ComparisonRepository: Send + Sync {
    /// List all rows of one kind, most recently created first.
    async fn list(&self, kind: ComparisonKind) -> Result<Vec<Comparison>, DomainError>;

    /// Find a row by its ID within one kind. Returns `None` if not found.
    async fn find_by_id(
        &self,
        kind: ComparisonKind,
        id: &ComparisonId,
    ) -> Result<Option<Comparison>, DomainError>;

    /// Insert a draft, assigning id and timestamps. Returns the stored
    /// record.
    async fn insert(
        &self,
        kind: ComparisonKind,
        draft: ComparisonDraft,
    ) -> Result<Comparison, DomainError>;

    /// Apply a partial patch, refreshing `updated_at`. Returns whether a
    /// record was modified.
    async fn update(
        &self,
        kind: ComparisonKind,
        id: &ComparisonId,
        patch: ComparisonPatch,
    ) -> Result<bool, DomainError>;

    /// Delete by identifier. Returns whether a record was removed.
    async fn delete(&self, kind: ComparisonKind, id: &ComparisonId)
        -> Result<bool, DomainError>;

    /// Replace the entire collection: delete every existing row, then
    /// insert the full replacement list with fresh timestamps.
    ///
    /// Not transactional: a failure between the delete and insert phases
    /// leaves the collection empty. Callers treat any error as a failed
    /// save.
    async fn replace_all(
        &self,
        kind: ComparisonKind,
        drafts: Vec<ComparisonDraft>,
    ) -> Result<Vec<Comparison>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ComparisonRepository) {}
    }
}
