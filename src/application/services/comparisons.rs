//! Comparison service - cached reads, swallowed mutations, replace-all.
//!
//! Covers both comparison kinds through one service. Mutations follow the
//! team-member policy (swallow to sentinel); the bulk save is the
//! delete-then-insert replace-all whose partial-failure gap is inherited
//! from the port contract.

use std::sync::Arc;

use crate::application::cache::{ResourceCache, ResourceKey};
use crate::domain::foundation::ComparisonId;
use crate::domain::resources::{Comparison, ComparisonDraft, ComparisonKind, ComparisonPatch};
use crate::ports::ComparisonRepository;

fn cache_key(kind: ComparisonKind) -> ResourceKey {
    match kind {
        ComparisonKind::Feature => ResourceKey::FeatureComparisons,
        ComparisonKind::Attribute => ResourceKey::AttributeComparisons,
    }
}

/// Service for the feature/attribute comparison resources.
pub struct ComparisonService {
    repository: Arc<dyn ComparisonRepository>,
    cache: Arc<ResourceCache>,
}

impl ComparisonService {
    pub fn new(repository: Arc<dyn ComparisonRepository>, cache: Arc<ResourceCache>) -> Self {
        Self { repository, cache }
    }

    /// Lists all rows of one kind, serving the cached list when fresh.
    pub async fn list(&self, kind: ComparisonKind) -> Vec<Comparison> {
        let key = cache_key(kind);
        if let Some(cached) = self.cache.comparisons(key).get() {
            return cached;
        }
        match self.repository.list(kind).await {
            Ok(rows) => {
                self.cache.comparisons(key).put(rows.clone());
                rows
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    collection = kind.collection(),
                    "Failed to list comparisons, returning empty list"
                );
                Vec::new()
            }
        }
    }

    /// Fetches one row. Absent on not-found and on remote failure.
    pub async fn get(&self, kind: ComparisonKind, id: &ComparisonId) -> Option<Comparison> {
        match self.repository.find_by_id(kind, id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, comparison_id = %id, "Failed to fetch comparison");
                None
            }
        }
    }

    /// Creates a row. Absent on failure.
    pub async fn create(&self, kind: ComparisonKind, draft: ComparisonDraft) -> Option<Comparison> {
        match self.repository.insert(kind, draft).await {
            Ok(row) => {
                self.cache.invalidate(cache_key(kind));
                Some(row)
            }
            Err(e) => {
                tracing::error!(error = %e, collection = kind.collection(), "Failed to create comparison");
                None
            }
        }
    }

    /// Applies a partial patch. False on failure or when nothing changed.
    pub async fn update(
        &self,
        kind: ComparisonKind,
        id: &ComparisonId,
        patch: ComparisonPatch,
    ) -> bool {
        match self.repository.update(kind, id, patch).await {
            Ok(modified) => {
                self.cache.invalidate(cache_key(kind));
                modified
            }
            Err(e) => {
                tracing::error!(error = %e, comparison_id = %id, "Failed to update comparison");
                false
            }
        }
    }

    /// Deletes a row. False on failure or when nothing was removed.
    pub async fn delete(&self, kind: ComparisonKind, id: &ComparisonId) -> bool {
        match self.repository.delete(kind, id).await {
            Ok(removed) => {
                self.cache.invalidate(cache_key(kind));
                removed
            }
            Err(e) => {
                tracing::error!(error = %e, comparison_id = %id, "Failed to delete comparison");
                false
            }
        }
    }

    /// Replaces the whole collection with `drafts`. True on success.
    ///
    /// A failure between the delete and insert phases can leave the
    /// collection empty; the error is logged and reported as false.
    pub async fn save_all(&self, kind: ComparisonKind, drafts: Vec<ComparisonDraft>) -> bool {
        match self.repository.replace_all(kind, drafts).await {
            Ok(_) => {
                self.cache.invalidate(cache_key(kind));
                true
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    collection = kind.collection(),
                    "Replace-all save failed; collection may be partially cleared"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, Percentage};
    use crate::domain::resources::{CompetitorMark, OwnMark};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory double with a switch to fail the insert phase of
    /// replace_all after the delete phase ran.
    struct MockComparisonRepository {
        rows: Mutex<HashMap<ComparisonKind, Vec<Comparison>>>,
        failing: bool,
        fail_insert_phase: bool,
    }

    impl MockComparisonRepository {
        fn new() -> Self {
            Self {
                rows: Mutex::new(HashMap::new()),
                failing: false,
                fail_insert_phase: false,
            }
        }

        fn failing() -> Self {
            Self {
                rows: Mutex::new(HashMap::new()),
                failing: true,
                fail_insert_phase: false,
            }
        }

        fn failing_insert_phase() -> Self {
            Self {
                rows: Mutex::new(HashMap::new()),
                failing: false,
                fail_insert_phase: true,
            }
        }

        fn check(&self) -> Result<(), DomainError> {
            if self.failing {
                Err(DomainError::new(ErrorCode::DatabaseError, "simulated failure"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ComparisonRepository for MockComparisonRepository {
        async fn list(&self, kind: ComparisonKind) -> Result<Vec<Comparison>, DomainError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().get(&kind).cloned().unwrap_or_default())
        }

        async fn find_by_id(
            &self,
            kind: ComparisonKind,
            id: &ComparisonId,
        ) -> Result<Option<Comparison>, DomainError> {
            self.check()?;
            Ok(self
                .rows
                .lock()
                .unwrap()
                .get(&kind)
                .and_then(|rows| rows.iter().find(|r| &r.id == id).cloned()))
        }

        async fn insert(
            &self,
            kind: ComparisonKind,
            draft: ComparisonDraft,
        ) -> Result<Comparison, DomainError> {
            self.check()?;
            let row = Comparison::from_draft(kind, draft);
            self.rows.lock().unwrap().entry(kind).or_default().push(row.clone());
            Ok(row)
        }

        async fn update(
            &self,
            kind: ComparisonKind,
            id: &ComparisonId,
            patch: ComparisonPatch,
        ) -> Result<bool, DomainError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            match rows
                .entry(kind)
                .or_default()
                .iter_mut()
                .find(|r| &r.id == id)
            {
                Some(row) => {
                    row.apply(patch);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(
            &self,
            kind: ComparisonKind,
            id: &ComparisonId,
        ) -> Result<bool, DomainError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let list = rows.entry(kind).or_default();
            let before = list.len();
            list.retain(|r| &r.id != id);
            Ok(list.len() < before)
        }

        async fn replace_all(
            &self,
            kind: ComparisonKind,
            drafts: Vec<ComparisonDraft>,
        ) -> Result<Vec<Comparison>, DomainError> {
            self.check()?;
            // Delete phase.
            self.rows.lock().unwrap().insert(kind, Vec::new());
            // Insert phase.
            if self.fail_insert_phase {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "simulated insert-phase failure",
                ));
            }
            let rows: Vec<Comparison> = drafts
                .into_iter()
                .map(|d| Comparison::from_draft(kind, d))
                .collect();
            self.rows.lock().unwrap().insert(kind, rows.clone());
            Ok(rows)
        }
    }

    fn feature_draft(label: &str) -> ComparisonDraft {
        ComparisonDraft {
            label: label.to_string(),
            your_product: OwnMark::Flag(true),
            competitors: vec![CompetitorMark::Feature {
                name: "RivalCorp".to_string(),
                has_feature: false,
            }],
            category: "Core".to_string(),
        }
    }

    fn service(repo: MockComparisonRepository) -> ComparisonService {
        ComparisonService::new(Arc::new(repo), Arc::new(ResourceCache::new()))
    }

    #[tokio::test]
    async fn list_swallows_remote_failure() {
        let service = service(MockComparisonRepository::failing());
        assert!(service.list(ComparisonKind::Feature).await.is_empty());
    }

    #[tokio::test]
    async fn kinds_are_isolated_collections() {
        let service = service(MockComparisonRepository::new());
        service.create(ComparisonKind::Feature, feature_draft("SSO")).await.unwrap();

        assert_eq!(service.list(ComparisonKind::Feature).await.len(), 1);
        assert!(service.list(ComparisonKind::Attribute).await.is_empty());
    }

    #[tokio::test]
    async fn save_all_replaces_the_collection() {
        let service = service(MockComparisonRepository::new());
        service.create(ComparisonKind::Feature, feature_draft("Old")).await.unwrap();

        assert!(
            service
                .save_all(
                    ComparisonKind::Feature,
                    vec![feature_draft("New A"), feature_draft("New B")],
                )
                .await
        );

        let rows = service.list(ComparisonKind::Feature).await;
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.label.starts_with("New")));
    }

    #[tokio::test]
    async fn save_all_with_empty_list_empties_the_collection() {
        let service = service(MockComparisonRepository::new());
        service.create(ComparisonKind::Attribute, ComparisonDraft {
            label: "Ease of use".to_string(),
            your_product: OwnMark::Score(Percentage::new(80)),
            ..Default::default()
        }).await.unwrap();

        assert!(service.save_all(ComparisonKind::Attribute, vec![]).await);
        assert!(service.list(ComparisonKind::Attribute).await.is_empty());
    }

    #[tokio::test]
    async fn save_all_reports_false_on_failure() {
        let service = service(MockComparisonRepository::failing());
        assert!(!service.save_all(ComparisonKind::Feature, vec![feature_draft("X")]).await);
    }

    #[tokio::test]
    async fn insert_phase_failure_leaves_collection_empty() {
        // The known replace-all gap: delete succeeded, insert failed.
        let service = service(MockComparisonRepository::failing_insert_phase());
        service.create(ComparisonKind::Feature, feature_draft("Existing")).await;

        assert!(!service.save_all(ComparisonKind::Feature, vec![feature_draft("New")]).await);
        assert!(service.list(ComparisonKind::Feature).await.is_empty());
    }

    #[tokio::test]
    async fn mutations_swallow_errors_to_sentinels() {
        let service = service(MockComparisonRepository::failing());
        let id = ComparisonId::new();
        assert!(service.create(ComparisonKind::Feature, feature_draft("X")).await.is_none());
        assert!(!service.update(ComparisonKind::Feature, &id, ComparisonPatch::default()).await);
        assert!(!service.delete(ComparisonKind::Feature, &id).await);
    }
}
