//! Team member repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TeamMemberId};
use crate::domain::resources::{TeamMember, TeamMemberDraft, TeamMemberPatch};

/// Repository port for team member persistence.
#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    /// List all team members, ordered by name (the table has no
    /// timestamps).
    async fn list(&self) -> Result<Vec<TeamMember>, DomainError>;

    /// Find a team member by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError>;

    /// Insert a draft, assigning an id. Returns the stored record.
    async fn insert(&self, draft: TeamMemberDraft) -> Result<TeamMember, DomainError>;

    /// Apply a partial patch. Returns whether a record was modified.
    async fn update(&self, id: &TeamMemberId, patch: TeamMemberPatch)
        -> Result<bool, DomainError>;

    /// Delete by identifier. Returns whether a record was removed.
    async fn delete(&self, id: &TeamMemberId) -> Result<bool, DomainError>;
}
