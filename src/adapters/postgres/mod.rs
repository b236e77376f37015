//! PostgreSQL adapters - repository implementations backed by sqlx.

mod comparison_repository;
mod competitor_repository;
mod goal_repository;
mod team_member_repository;

pub use comparison_repository::PostgresComparisonRepository;
pub use competitor_repository::PostgresCompetitorRepository;
pub use goal_repository::PostgresGoalRepository;
pub use team_member_repository::PostgresTeamMemberRepository;

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::foundation::{DomainError, ErrorCode, Percentage};

/// Maps a database failure into the domain error vocabulary.
pub(crate) fn db_error(context: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
}

/// Reads one column off a row, mapping decode failures.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| db_error(&format!("Failed to read column '{}'", name), e))
}

/// Converts a stored integer into a bounded percentage.
///
/// Out-of-range stored values clamp rather than fail the whole read.
pub(crate) fn percentage_from_db(value: i32) -> Percentage {
    Percentage::new(value.clamp(0, 100) as u8)
}
