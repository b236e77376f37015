//! Team member service - cached reads, swallowed mutations.
//!
//! Unlike goals and competitors, team member mutations are not surfaced
//! to the user: errors are logged and converted to the sentinel (absent
//! record / false).

use std::sync::Arc;

use crate::application::cache::{ResourceCache, ResourceKey};
use crate::domain::foundation::TeamMemberId;
use crate::domain::resources::{TeamMember, TeamMemberDraft, TeamMemberPatch};
use crate::ports::TeamMemberRepository;

/// Service for the team members resource.
pub struct TeamMemberService {
    repository: Arc<dyn TeamMemberRepository>,
    cache: Arc<ResourceCache>,
}

impl TeamMemberService {
    pub fn new(repository: Arc<dyn TeamMemberRepository>, cache: Arc<ResourceCache>) -> Self {
        Self { repository, cache }
    }

    /// Lists all team members, serving the cached list when fresh.
    pub async fn list(&self) -> Vec<TeamMember> {
        if let Some(cached) = self.cache.team_members().get() {
            return cached;
        }
        match self.repository.list().await {
            Ok(members) => {
                self.cache.team_members().put(members.clone());
                members
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list team members, returning empty list");
                Vec::new()
            }
        }
    }

    /// Fetches one team member. Absent on not-found and on remote failure.
    pub async fn get(&self, id: &TeamMemberId) -> Option<TeamMember> {
        match self.repository.find_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, team_member_id = %id, "Failed to fetch team member");
                None
            }
        }
    }

    /// Creates a team member. Absent on failure.
    pub async fn create(&self, draft: TeamMemberDraft) -> Option<TeamMember> {
        match self.repository.insert(draft).await {
            Ok(member) => {
                self.cache.invalidate(ResourceKey::TeamMembers);
                Some(member)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create team member");
                None
            }
        }
    }

    /// Applies a partial patch. False on failure or when nothing changed.
    pub async fn update(&self, id: &TeamMemberId, patch: TeamMemberPatch) -> bool {
        match self.repository.update(id, patch).await {
            Ok(modified) => {
                self.cache.invalidate(ResourceKey::TeamMembers);
                modified
            }
            Err(e) => {
                tracing::error!(error = %e, team_member_id = %id, "Failed to update team member");
                false
            }
        }
    }

    /// Deletes a team member. False on failure or when nothing was removed.
    pub async fn delete(&self, id: &TeamMemberId) -> bool {
        match self.repository.delete(id).await {
            Ok(removed) => {
                self.cache.invalidate(ResourceKey::TeamMembers);
                removed
            }
            Err(e) => {
                tracing::error!(error = %e, team_member_id = %id, "Failed to delete team member");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockTeamMemberRepository {
        members: Mutex<Vec<TeamMember>>,
        failing: bool,
    }

    impl MockTeamMemberRepository {
        fn new() -> Self {
            Self {
                members: Mutex::new(Vec::new()),
                failing: false,
            }
        }

        fn failing() -> Self {
            Self {
                members: Mutex::new(Vec::new()),
                failing: true,
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
    impl TeamMemberRepository for MockTeamMemberRepository {
        async fn list(&self) -> Result<Vec<TeamMember>, DomainError> {
            self.check()?;
            Ok(self.members.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError> {
            self.check()?;
            Ok(self.members.lock().unwrap().iter().find(|m| &m.id == id).cloned())
        }

        async fn insert(&self, draft: TeamMemberDraft) -> Result<TeamMember, DomainError> {
            self.check()?;
            let member = TeamMember::from_draft(draft);
            self.members.lock().unwrap().push(member.clone());
            Ok(member)
        }

        async fn update(
            &self,
            id: &TeamMemberId,
            patch: TeamMemberPatch,
        ) -> Result<bool, DomainError> {
            self.check()?;
            let mut members = self.members.lock().unwrap();
            match members.iter_mut().find(|m| &m.id == id) {
                Some(member) => {
                    member.apply(patch);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, id: &TeamMemberId) -> Result<bool, DomainError> {
            self.check()?;
            let mut members = self.members.lock().unwrap();
            let before = members.len();
            members.retain(|m| &m.id != id);
            Ok(members.len() < before)
        }
    }

    fn draft(name: &str) -> TeamMemberDraft {
        TeamMemberDraft {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn service(repo: MockTeamMemberRepository) -> TeamMemberService {
        TeamMemberService::new(Arc::new(repo), Arc::new(ResourceCache::new()))
    }

    #[tokio::test]
    async fn create_returns_absent_on_failure() {
        let service = service(MockTeamMemberRepository::failing());
        assert!(service.create(draft("Doomed")).await.is_none());
    }

    #[tokio::test]
    async fn update_and_delete_return_false_on_failure() {
        let service = service(MockTeamMemberRepository::failing());
        let id = TeamMemberId::new();
        assert!(!service.update(&id, TeamMemberPatch::default()).await);
        assert!(!service.delete(&id).await);
    }

    #[tokio::test]
    async fn crud_roundtrip_with_sentinels() {
        let service = service(MockTeamMemberRepository::new());

        let created = service.create(draft("Jordan Reyes")).await.unwrap();
        assert!(service.list().await.iter().any(|m| m.id == created.id));

        assert!(
            service
                .update(
                    &created.id,
                    TeamMemberPatch {
                        position: Some("Lead Analyst".to_string()),
                        ..Default::default()
                    },
                )
                .await
        );
        assert_eq!(
            service.get(&created.id).await.unwrap().position,
            "Lead Analyst"
        );

        assert!(service.delete(&created.id).await);
        assert!(service.get(&created.id).await.is_none());
        assert!(!service.delete(&created.id).await);
    }
}
