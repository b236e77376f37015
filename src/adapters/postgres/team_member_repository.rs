//! PostgreSQL implementation of TeamMemberRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, TeamMemberId};
use crate::domain::resources::{TeamMember, TeamMemberDraft, TeamMemberPatch};
use crate::ports::TeamMemberRepository;

use super::{column, db_error, percentage_from_db};

/// PostgreSQL implementation of TeamMemberRepository.
#[derive(Clone)]
pub struct PostgresTeamMemberRepository {
    pool: PgPool,
}

impl PostgresTeamMemberRepository {
    /// Creates a new PostgresTeamMemberRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, position, email, phone, avatar, projects,
           projects_completed, tasks, tasks_completed, performance, availability
    FROM team_members
"#;

#[async_trait]
impl TeamMemberRepository for PostgresTeamMemberRepository {
    async fn list(&self) -> Result<Vec<TeamMember>, DomainError> {
        // No timestamps on this table; name order keeps the listing stable.
        let rows = sqlx::query(&format!("{} ORDER BY name", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list team members", e))?;

        rows.into_iter().map(row_to_team_member).collect()
    }

    async fn find_by_id(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch team member", e))?;

        row.map(row_to_team_member).transpose()
    }

    async fn insert(&self, draft: TeamMemberDraft) -> Result<TeamMember, DomainError> {
        let member = TeamMember::from_draft(draft);

        sqlx::query(
            r#"
            INSERT INTO team_members (
                id, name, position, email, phone, avatar, projects,
                projects_completed, tasks, tasks_completed, performance, availability
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(member.id.as_uuid())
        .bind(&member.name)
        .bind(&member.position)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(&member.avatar)
        .bind(member.projects as i32)
        .bind(member.projects_completed as i32)
        .bind(member.tasks as i32)
        .bind(member.tasks_completed as i32)
        .bind(member.performance.value() as i32)
        .bind(&member.availability)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert team member", e))?;

        Ok(member)
    }

    async fn update(
        &self,
        id: &TeamMemberId,
        patch: TeamMemberPatch,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE team_members SET
                name = COALESCE($2, name),
                position = COALESCE($3, position),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                avatar = COALESCE($6, avatar),
                projects = COALESCE($7, projects),
                projects_completed = COALESCE($8, projects_completed),
                tasks = COALESCE($9, tasks),
                tasks_completed = COALESCE($10, tasks_completed),
                performance = COALESCE($11, performance),
                availability = COALESCE($12, availability)
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(patch.name)
        .bind(patch.position)
        .bind(patch.email)
        .bind(patch.phone)
        .bind(patch.avatar)
        .bind(patch.projects.map(|v| v as i32))
        .bind(patch.projects_completed.map(|v| v as i32))
        .bind(patch.tasks.map(|v| v as i32))
        .bind(patch.tasks_completed.map(|v| v as i32))
        .bind(patch.performance.map(|p| p.value() as i32))
        .bind(patch.availability)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update team member", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &TeamMemberId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete team member", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_team_member(row: PgRow) -> Result<TeamMember, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let projects: i32 = column(&row, "projects")?;
    let projects_completed: i32 = column(&row, "projects_completed")?;
    let tasks: i32 = column(&row, "tasks")?;
    let tasks_completed: i32 = column(&row, "tasks_completed")?;
    let performance: i32 = column(&row, "performance")?;

    Ok(TeamMember {
        id: TeamMemberId::from_uuid(id),
        name: column(&row, "name")?,
        position: column(&row, "position")?,
        email: column(&row, "email")?,
        phone: column(&row, "phone")?,
        avatar: column(&row, "avatar")?,
        projects: projects.max(0) as u32,
        projects_completed: projects_completed.max(0) as u32,
        tasks: tasks.max(0) as u32,
        tasks_completed: tasks_completed.max(0) as u32,
        performance: percentage_from_db(performance),
        availability: column(&row, "availability")?,
    })
}
