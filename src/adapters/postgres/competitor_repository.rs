//! PostgreSQL implementation of CompetitorRepository.
//!
//! List fields (locations, strengths, weaknesses) are stored as native
//! text arrays.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{CompetitorId, DomainError, Timestamp};
use crate::domain::resources::{Competitor, CompetitorDraft, CompetitorPatch};
use crate::ports::CompetitorRepository;

use super::{column, db_error, percentage_from_db};

/// PostgreSQL implementation of CompetitorRepository.
#[derive(Clone)]
pub struct PostgresCompetitorRepository {
    pool: PgPool,
}

impl PostgresCompetitorRepository {
    /// Creates a new PostgresCompetitorRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, logo, description, founded, employees, funding,
           locations, strengths, weaknesses, market_share, growth_rate,
           customer_satisfaction, price_point, threat, created_at, updated_at
    FROM competitors
"#;

#[async_trait]
impl CompetitorRepository for PostgresCompetitorRepository {
    async fn list(&self) -> Result<Vec<Competitor>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY created_at DESC", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list competitors", e))?;

        rows.into_iter().map(row_to_competitor).collect()
    }

    async fn find_by_id(&self, id: &CompetitorId) -> Result<Option<Competitor>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch competitor", e))?;

        row.map(row_to_competitor).transpose()
    }

    async fn insert(&self, draft: CompetitorDraft) -> Result<Competitor, DomainError> {
        let competitor = Competitor::from_draft(draft);

        sqlx::query(
            r#"
            INSERT INTO competitors (
                id, name, logo, description, founded, employees, funding,
                locations, strengths, weaknesses, market_share, growth_rate,
                customer_satisfaction, price_point, threat, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(competitor.id.as_uuid())
        .bind(&competitor.name)
        .bind(&competitor.logo)
        .bind(&competitor.description)
        .bind(&competitor.founded)
        .bind(&competitor.employees)
        .bind(&competitor.funding)
        .bind(&competitor.locations)
        .bind(&competitor.strengths)
        .bind(&competitor.weaknesses)
        .bind(competitor.market_share.value() as i32)
        .bind(competitor.growth_rate.value() as i32)
        .bind(competitor.customer_satisfaction.value() as i32)
        .bind(&competitor.price_point)
        .bind(&competitor.threat)
        .bind(competitor.created_at.as_datetime())
        .bind(competitor.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert competitor", e))?;

        Ok(competitor)
    }

    async fn update(
        &self,
        id: &CompetitorId,
        patch: CompetitorPatch,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE competitors SET
                name = COALESCE($2, name),
                logo = COALESCE($3, logo),
                description = COALESCE($4, description),
                founded = COALESCE($5, founded),
                employees = COALESCE($6, employees),
                funding = COALESCE($7, funding),
                locations = COALESCE($8, locations),
                strengths = COALESCE($9, strengths),
                weaknesses = COALESCE($10, weaknesses),
                market_share = COALESCE($11, market_share),
                growth_rate = COALESCE($12, growth_rate),
                customer_satisfaction = COALESCE($13, customer_satisfaction),
                price_point = COALESCE($14, price_point),
                threat = COALESCE($15, threat),
                updated_at = $16
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(patch.name)
        .bind(patch.logo)
        .bind(patch.description)
        .bind(patch.founded)
        .bind(patch.employees)
        .bind(patch.funding)
        .bind(patch.locations)
        .bind(patch.strengths)
        .bind(patch.weaknesses)
        .bind(patch.market_share.map(|p| p.value() as i32))
        .bind(patch.growth_rate.map(|p| p.value() as i32))
        .bind(patch.customer_satisfaction.map(|p| p.value() as i32))
        .bind(patch.price_point)
        .bind(patch.threat)
        .bind(Timestamp::now().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update competitor", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &CompetitorId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM competitors WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete competitor", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_competitor(row: PgRow) -> Result<Competitor, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let market_share: i32 = column(&row, "market_share")?;
    let growth_rate: i32 = column(&row, "growth_rate")?;
    let customer_satisfaction: i32 = column(&row, "customer_satisfaction")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(Competitor {
        id: CompetitorId::from_uuid(id),
        name: column(&row, "name")?,
        logo: column(&row, "logo")?,
        description: column(&row, "description")?,
        founded: column(&row, "founded")?,
        employees: column(&row, "employees")?,
        funding: column(&row, "funding")?,
        locations: column(&row, "locations")?,
        strengths: column(&row, "strengths")?,
        weaknesses: column(&row, "weaknesses")?,
        market_share: percentage_from_db(market_share),
        growth_rate: percentage_from_db(growth_rate),
        customer_satisfaction: percentage_from_db(customer_satisfaction),
        price_point: column(&row, "price_point")?,
        threat: column(&row, "threat")?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}
