//! PostgreSQL implementation of ComparisonRepository.
//!
//! One adapter serves both collections; the kind picks the table and the
//! label column ("feature" / "attribute"). Your-product and competitor
//! marks are stored as JSONB with their wire field names.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{ComparisonId, DomainError, ErrorCode, Timestamp};
use crate::domain::resources::{
    Comparison, ComparisonDraft, ComparisonKind, ComparisonPatch, CompetitorMark, OwnMark,
};
use crate::ports::ComparisonRepository;

use super::{column, db_error};

/// PostgreSQL implementation of ComparisonRepository.
#[derive(Clone)]
pub struct PostgresComparisonRepository {
    pool: PgPool,
}

impl PostgresComparisonRepository {
    /// Creates a new PostgresComparisonRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select_sql(kind: ComparisonKind) -> String {
        // Table and column names come from a closed enum, never user input.
        format!(
            "SELECT id, {label} AS label, your_product, competitors, category, \
             created_at, updated_at FROM {table}",
            label = kind.label_column(),
            table = kind.collection(),
        )
    }

    async fn insert_row(&self, row: &Comparison) -> Result<(), DomainError> {
        let your_product = serde_json::to_value(row.your_product)
            .map_err(|e| db_error("Failed to encode your_product", e))?;
        let competitors = serde_json::to_value(&row.competitors)
            .map_err(|e| db_error("Failed to encode competitors", e))?;

        sqlx::query(&format!(
            "INSERT INTO {table} (id, {label}, your_product, competitors, category, \
             created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7)",
            label = row.kind.label_column(),
            table = row.kind.collection(),
        ))
        .bind(row.id.as_uuid())
        .bind(&row.label)
        .bind(your_product)
        .bind(competitors)
        .bind(&row.category)
        .bind(row.created_at.as_datetime())
        .bind(row.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert comparison", e))?;

        Ok(())
    }
}

#[async_trait]
impl ComparisonRepository for PostgresComparisonRepository {
    async fn list(&self, kind: ComparisonKind) -> Result<Vec<Comparison>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY created_at DESC", Self::select_sql(kind)))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list comparisons", e))?;

        rows.into_iter().map(|row| row_to_comparison(kind, row)).collect()
    }

    async fn find_by_id(
        &self,
        kind: ComparisonKind,
        id: &ComparisonId,
    ) -> Result<Option<Comparison>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", Self::select_sql(kind)))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch comparison", e))?;

        row.map(|row| row_to_comparison(kind, row)).transpose()
    }

    async fn insert(
        &self,
        kind: ComparisonKind,
        draft: ComparisonDraft,
    ) -> Result<Comparison, DomainError> {
        let row = Comparison::from_draft(kind, draft);
        self.insert_row(&row).await?;
        Ok(row)
    }

    async fn update(
        &self,
        kind: ComparisonKind,
        id: &ComparisonId,
        patch: ComparisonPatch,
    ) -> Result<bool, DomainError> {
        let your_product = patch
            .your_product
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| db_error("Failed to encode your_product", e))?;
        let competitors = patch
            .competitors
            .map(|marks| serde_json::to_value(&marks))
            .transpose()
            .map_err(|e| db_error("Failed to encode competitors", e))?;

        let result = sqlx::query(&format!(
            "UPDATE {table} SET \
                {label} = COALESCE($2, {label}), \
                your_product = COALESCE($3, your_product), \
                competitors = COALESCE($4, competitors), \
                category = COALESCE($5, category), \
                updated_at = $6 \
             WHERE id = $1",
            label = kind.label_column(),
            table = kind.collection(),
        ))
        .bind(id.as_uuid())
        .bind(patch.label)
        .bind(your_product)
        .bind(competitors)
        .bind(patch.category)
        .bind(Timestamp::now().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update comparison", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(
        &self,
        kind: ComparisonKind,
        id: &ComparisonId,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", kind.collection()))
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete comparison", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn replace_all(
        &self,
        kind: ComparisonKind,
        drafts: Vec<ComparisonDraft>,
    ) -> Result<Vec<Comparison>, DomainError> {
        // Delete phase. Not wrapped in a transaction with the insert
        // phase: a failure below leaves the collection empty.
        sqlx::query(&format!("DELETE FROM {}", kind.collection()))
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to clear comparisons", e))?;

        // Insert phase.
        let mut rows = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let row = Comparison::from_draft(kind, draft);
            self.insert_row(&row).await?;
            rows.push(row);
        }
        Ok(rows)
    }
}

fn row_to_comparison(kind: ComparisonKind, row: PgRow) -> Result<Comparison, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let your_product_json: serde_json::Value = column(&row, "your_product")?;
    let competitors_json: serde_json::Value = column(&row, "competitors")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    let your_product: OwnMark = serde_json::from_value(your_product_json).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid your_product payload: {}", e),
        )
    })?;
    let competitors: Vec<CompetitorMark> =
        serde_json::from_value(competitors_json).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid competitors payload: {}", e),
            )
        })?;

    Ok(Comparison {
        id: ComparisonId::from_uuid(id),
        kind,
        label: column(&row, "label")?,
        your_product,
        competitors,
        category: column(&row, "category")?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}
