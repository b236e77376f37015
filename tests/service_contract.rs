//! Resource service contract tests against in-memory repositories.
//!
//! Covers the CRUD round-trip guarantees and the cache invalidation
//! discipline without a live database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use rivalscope::application::services::{ComparisonService, GoalService};
use rivalscope::application::ResourceCache;
use rivalscope::domain::foundation::{ComparisonId, DomainError, GoalId, Percentage};
use rivalscope::domain::resources::{
    Comparison, ComparisonDraft, ComparisonKind, ComparisonPatch, CompetitorMark, Goal,
    GoalDraft, GoalPatch, OwnMark,
};
use rivalscope::ports::{ComparisonRepository, GoalRepository};

#[derive(Default)]
struct InMemoryGoalRepository {
    goals: Mutex<Vec<Goal>>,
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    async fn list(&self) -> Result<Vec<Goal>, DomainError> {
        Ok(self.goals.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
        Ok(self.goals.lock().unwrap().iter().find(|g| &g.id == id).cloned())
    }

    async fn insert(&self, draft: GoalDraft) -> Result<Goal, DomainError> {
        let goal = Goal::from_draft(draft);
        self.goals.lock().unwrap().push(goal.clone());
        Ok(goal)
    }

    async fn update(&self, id: &GoalId, patch: GoalPatch) -> Result<bool, DomainError> {
        let mut goals = self.goals.lock().unwrap();
        match goals.iter_mut().find(|g| &g.id == id) {
            Some(goal) => {
                goal.apply(patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &GoalId) -> Result<bool, DomainError> {
        let mut goals = self.goals.lock().unwrap();
        let before = goals.len();
        goals.retain(|g| &g.id != id);
        Ok(goals.len() < before)
    }
}

#[derive(Default)]
struct InMemoryComparisonRepository {
    rows: Mutex<HashMap<ComparisonKind, Vec<Comparison>>>,
}

#[async_trait]
impl ComparisonRepository for InMemoryComparisonRepository {
    async fn list(&self, kind: ComparisonKind) -> Result<Vec<Comparison>, DomainError> {
        Ok(self.rows.lock().unwrap().get(&kind).cloned().unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        kind: ComparisonKind,
        id: &ComparisonId,
    ) -> Result<Option<Comparison>, DomainError> {
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
        let mut rows = self.rows.lock().unwrap();
        match rows.entry(kind).or_default().iter_mut().find(|r| &r.id == id) {
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
        let rows: Vec<Comparison> = drafts
            .into_iter()
            .map(|d| Comparison::from_draft(kind, d))
            .collect();
        self.rows.lock().unwrap().insert(kind, rows.clone());
        Ok(rows)
    }
}

fn goal_service() -> GoalService {
    GoalService::new(
        Arc::new(InMemoryGoalRepository::default()),
        Arc::new(ResourceCache::new()),
    )
}

fn comparison_service() -> ComparisonService {
    ComparisonService::new(
        Arc::new(InMemoryComparisonRepository::default()),
        Arc::new(ResourceCache::new()),
    )
}

#[tokio::test]
async fn create_then_list_includes_the_draft_fields() {
    let service = goal_service();

    let created = service
        .create(GoalDraft {
            title: "Expand to EMEA".to_string(),
            description: "Open two regional offices".to_string(),
            progress: Percentage::new(10),
            due_date: "2026-12-31".to_string(),
            status: "On Track".to_string(),
            priority: "high".to_string(),
            category: "growth".to_string(),
        })
        .await
        .unwrap();

    let listed = service.list().await;
    let found = listed.iter().find(|g| g.id == created.id).unwrap();
    assert_eq!(found.title, "Expand to EMEA");
    assert_eq!(found.description, "Open two regional offices");
    assert_eq!(found.progress.value(), 10);
    assert_eq!(found.due_date, "2026-12-31");
    assert_eq!(found.priority, "high");
}

#[tokio::test]
async fn delete_then_list_excludes_the_id() {
    let service = goal_service();
    let created = service
        .create(GoalDraft {
            title: "Ephemeral".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(service.delete(&created.id).await.unwrap());
    assert!(!service.list().await.iter().any(|g| g.id == created.id));
}

#[tokio::test]
async fn progress_patch_touches_only_progress_and_updated_at() {
    let service = goal_service();
    let created = service
        .create(GoalDraft {
            title: "Hold Steady".to_string(),
            description: "unchanged".to_string(),
            progress: Percentage::new(20),
            due_date: "2026-06-30".to_string(),
            status: "Early Stage".to_string(),
            priority: "medium".to_string(),
            category: "ops".to_string(),
        })
        .await
        .unwrap();

    service
        .update(
            &created.id,
            GoalPatch {
                progress: Some(Percentage::new(50)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let after = service.get(&created.id).await.unwrap();
    assert_eq!(after.progress.value(), 50);
    assert_eq!(after.title, created.title);
    assert_eq!(after.description, created.description);
    assert_eq!(after.due_date, created.due_date);
    assert_eq!(after.status, created.status);
    assert_eq!(after.priority, created.priority);
    assert_eq!(after.category, created.category);
    assert_eq!(after.created_at, created.created_at);
    assert!(after.updated_at.is_after(&created.updated_at) || after.updated_at == created.updated_at);
}

#[tokio::test]
async fn goal_lifecycle_scenario() {
    let service = goal_service();

    let created = service
        .create(GoalDraft {
            title: "Increase Market Share".to_string(),
            progress: Percentage::ZERO,
            status: "Early Stage".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let listed = service.list().await;
    let found = listed.iter().find(|g| g.title == "Increase Market Share").unwrap();
    assert_eq!(found.id, created.id);

    assert!(
        service
            .update(
                &created.id,
                GoalPatch {
                    progress: Some(Percentage::new(65)),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
    );
    assert_eq!(service.get(&created.id).await.unwrap().progress.value(), 65);

    assert!(service.delete(&created.id).await.unwrap());
    assert!(service.get(&created.id).await.is_none());
}

#[tokio::test]
async fn stale_cache_refetches_after_mutation() {
    let repo = Arc::new(InMemoryGoalRepository::default());
    let cache = Arc::new(ResourceCache::new());
    let service = GoalService::new(repo, cache.clone());

    assert!(service.list().await.is_empty());
    assert!(cache.goals().is_fresh());

    service
        .create(GoalDraft {
            title: "Visible after refetch".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(!cache.goals().is_fresh());

    // The next read bypasses the stale slot and sees the new record.
    assert_eq!(service.list().await.len(), 1);
    assert!(cache.goals().is_fresh());
}

#[tokio::test]
async fn save_all_empty_list_empties_the_collection() {
    let service = comparison_service();
    service
        .create(
            ComparisonKind::Feature,
            ComparisonDraft {
                label: "SSO".to_string(),
                your_product: OwnMark::Flag(true),
                competitors: vec![CompetitorMark::Feature {
                    name: "RivalCorp".to_string(),
                    has_feature: false,
                }],
                category: "Security".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(service.list(ComparisonKind::Feature).await.len(), 1);

    assert!(service.save_all(ComparisonKind::Feature, vec![]).await);
    assert!(service.list(ComparisonKind::Feature).await.is_empty());
}

#[tokio::test]
async fn save_all_tags_fresh_timestamps() {
    let service = comparison_service();

    assert!(
        service
            .save_all(
                ComparisonKind::Attribute,
                vec![ComparisonDraft {
                    label: "Ease of use".to_string(),
                    your_product: OwnMark::Score(Percentage::new(81)),
                    competitors: vec![CompetitorMark::Score {
                        name: "RivalCorp".to_string(),
                        score: Percentage::new(64),
                    }],
                    category: "UX".to_string(),
                }],
            )
            .await
    );

    let rows = service.list(ComparisonKind::Attribute).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].created_at, rows[0].updated_at);
    assert_eq!(rows[0].competitors[0].name(), "RivalCorp");
}
