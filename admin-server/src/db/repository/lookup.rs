//! Lookup Repository
//!
//! Read-only queries over the reference tables plus the [`LookupSource`]
//! seam the form validator uses to check foreign keys at submission time.

use super::RepoResult;
use async_trait::async_trait;
use shared::models::{LookupKind, LookupOption};
use sqlx::SqlitePool;

pub async fn find_countries(pool: &SqlitePool) -> RepoResult<Vec<LookupOption>> {
    let rows = sqlx::query_as::<_, LookupOption>("SELECT id, name FROM country ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_states(
    pool: &SqlitePool,
    country_id: Option<i64>,
) -> RepoResult<Vec<LookupOption>> {
    let rows = match country_id {
        Some(country_id) => {
            sqlx::query_as::<_, LookupOption>(
                "SELECT id, name FROM state WHERE country_id = ? ORDER BY name",
            )
            .bind(country_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, LookupOption>("SELECT id, name FROM state ORDER BY name")
                .fetch_all(pool)
                .await?
        }
    };
    Ok(rows)
}

pub async fn find_cities(pool: &SqlitePool, state_id: Option<i64>) -> RepoResult<Vec<LookupOption>> {
    let rows = match state_id {
        Some(state_id) => {
            sqlx::query_as::<_, LookupOption>(
                "SELECT id, name FROM city WHERE state_id = ? ORDER BY name",
            )
            .bind(state_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, LookupOption>("SELECT id, name FROM city ORDER BY name")
                .fetch_all(pool)
                .await?
        }
    };
    Ok(rows)
}

pub async fn find_departments(pool: &SqlitePool) -> RepoResult<Vec<LookupOption>> {
    let rows = sqlx::query_as::<_, LookupOption>("SELECT id, name FROM department ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn exists(pool: &SqlitePool, kind: LookupKind, id: i64) -> RepoResult<bool> {
    // Table name comes from LookupKind::table(), never from user input
    let sql = format!("SELECT COUNT(*) FROM {} WHERE id = ?", kind.table());
    let count: i64 = sqlx::query_scalar(&sql).bind(id).fetch_one(pool).await?;
    Ok(count > 0)
}

/// Foreign-key resolution seam for form validation.
///
/// Injected into the validator so schema checks stay independent of the
/// concrete storage (tests use an in-memory map).
#[async_trait]
pub trait LookupSource: Send + Sync {
    async fn exists(&self, kind: LookupKind, id: i64) -> RepoResult<bool>;
}

/// [`LookupSource`] backed by the SQLite pool
pub struct SqliteLookupSource<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SqliteLookupSource<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LookupSource for SqliteLookupSource<'_> {
    async fn exists(&self, kind: LookupKind, id: i64) -> RepoResult<bool> {
        exists(self.pool, kind, id).await
    }
}
