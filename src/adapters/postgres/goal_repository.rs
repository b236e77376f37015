//! PostgreSQL implementation of GoalRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, GoalId, Timestamp};
use crate::domain::resources::{Goal, GoalDraft, GoalPatch};
use crate::ports::GoalRepository;

use super::{column, db_error, percentage_from_db};

/// PostgreSQL implementation of GoalRepository.
#[derive(Clone)]
pub struct PostgresGoalRepository {
    pool: PgPool,
}

impl PostgresGoalRepository {
    /// Creates a new PostgresGoalRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PostgresGoalRepository {
    async fn list(&self) -> Result<Vec<Goal>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, progress, due_date, status,
                   priority, category, created_at, updated_at
            FROM goals
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list goals", e))?;

        rows.into_iter().map(row_to_goal).collect()
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, progress, due_date, status,
                   priority, category, created_at, updated_at
            FROM goals
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch goal", e))?;

        row.map(row_to_goal).transpose()
    }

    async fn insert(&self, draft: GoalDraft) -> Result<Goal, DomainError> {
        let goal = Goal::from_draft(draft);

        sqlx::query(
            r#"
            INSERT INTO goals (
                id, title, description, progress, due_date, status,
                priority, category, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(goal.id.as_uuid())
        .bind(&goal.title)
        .bind(&goal.description)
        .bind(goal.progress.value() as i32)
        .bind(&goal.due_date)
        .bind(&goal.status)
        .bind(&goal.priority)
        .bind(&goal.category)
        .bind(goal.created_at.as_datetime())
        .bind(goal.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert goal", e))?;

        Ok(goal)
    }

    async fn update(&self, id: &GoalId, patch: GoalPatch) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE goals SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                progress = COALESCE($4, progress),
                due_date = COALESCE($5, due_date),
                status = COALESCE($6, status),
                priority = COALESCE($7, priority),
                category = COALESCE($8, category),
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.progress.map(|p| p.value() as i32))
        .bind(patch.due_date)
        .bind(patch.status)
        .bind(patch.priority)
        .bind(patch.category)
        .bind(Timestamp::now().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update goal", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &GoalId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete goal", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_goal(row: PgRow) -> Result<Goal, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let progress: i32 = column(&row, "progress")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(Goal {
        id: GoalId::from_uuid(id),
        title: column(&row, "title")?,
        description: column(&row, "description")?,
        progress: percentage_from_db(progress),
        due_date: column(&row, "due_date")?,
        status: column(&row, "status")?,
        priority: column(&row, "priority")?,
        category: column(&row, "category")?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}
