//! Employee Repository
//!
//! List queries (search/sort/pagination), CRUD and bulk soft delete for the
//! employee table. All reads join the four lookup tables so callers get
//! resolved names in one round trip.

use super::{RepoError, RepoResult};
use crate::resource::form::NewEmployee;
use serde::{Deserialize, Serialize};
use shared::models::{EmployeeUpdate, EmployeeWithLookups};
use sqlx::SqlitePool;

const EMPLOYEE_SELECT: &str = "SELECT e.id, e.country_id, co.name AS country_name, \
     e.state_id, st.name AS state_name, e.city_id, ci.name AS city_name, \
     e.department_id, d.name AS department_name, \
     e.first_name, e.last_name, e.address, e.zip_code, e.dob, e.doj, \
     e.is_active, e.created_at, e.updated_at \
     FROM employee e \
     JOIN country co ON e.country_id = co.id \
     JOIN state st ON e.state_id = st.id \
     JOIN city ci ON e.city_id = ci.id \
     JOIN department d ON e.department_id = d.id";

/// Columns exposed to clients for sorting, mapped to SQL expressions.
/// Anything not listed here is rejected before it reaches the query.
const SORTABLE: &[(&str, &str)] = &[
    ("id", "e.id"),
    ("first_name", "e.first_name COLLATE NOCASE"),
    ("last_name", "e.last_name COLLATE NOCASE"),
    ("dob", "e.dob"),
    ("doj", "e.doj"),
    ("created_at", "e.created_at"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// List query parameters (also used as the axum Query extractor)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Substring applied to every searchable column
    pub search: Option<String>,
    /// Sort column, one of the whitelisted names (default `id`)
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
    /// 1-based page number
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(25).clamp(1, 100)
    }
}

/// One page of list results
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Outcome of a best-effort bulk delete
#[derive(Debug, Clone, Serialize)]
pub struct BulkDeleteOutcome {
    pub deleted: Vec<i64>,
    pub failed: Vec<BulkDeleteFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkDeleteFailure {
    pub id: i64,
    pub error: String,
}

fn sort_expr(query: &ListQuery) -> RepoResult<String> {
    let column = query.sort.as_deref().unwrap_or("id");
    let expr = SORTABLE
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, expr)| *expr)
        .ok_or_else(|| RepoError::Validation(format!("Unknown sort column: {column}")))?;
    let order = query.order.unwrap_or(SortOrder::Asc);
    Ok(format!("{expr} {}", order.sql()))
}

pub async fn find_page(pool: &SqlitePool, query: &ListQuery) -> RepoResult<Page<EmployeeWithLookups>> {
    let order_by = sort_expr(query)?;
    let page = query.page();
    let per_page = query.per_page();
    let offset = (page as i64 - 1) * per_page as i64;

    let search_filter =
        " AND (e.first_name LIKE ?1 OR e.last_name LIKE ?1 OR e.dob LIKE ?1 OR e.doj LIKE ?1)";
    let pattern = query.search.as_ref().map(|q| format!("%{q}%"));

    let (items, total) = match &pattern {
        Some(pattern) => {
            let sql = format!(
                "{EMPLOYEE_SELECT} WHERE e.is_active = 1{search_filter} ORDER BY {order_by} LIMIT ?2 OFFSET ?3"
            );
            let items = sqlx::query_as::<_, EmployeeWithLookups>(&sql)
                .bind(pattern)
                .bind(per_page as i64)
                .bind(offset)
                .fetch_all(pool)
                .await?;
            let count_sql =
                format!("SELECT COUNT(*) FROM employee e WHERE e.is_active = 1{search_filter}");
            let total: i64 = sqlx::query_scalar(&count_sql)
                .bind(pattern)
                .fetch_one(pool)
                .await?;
            (items, total)
        }
        None => {
            let sql = format!(
                "{EMPLOYEE_SELECT} WHERE e.is_active = 1 ORDER BY {order_by} LIMIT ?1 OFFSET ?2"
            );
            let items = sqlx::query_as::<_, EmployeeWithLookups>(&sql)
                .bind(per_page as i64)
                .bind(offset)
                .fetch_all(pool)
                .await?;
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee WHERE is_active = 1")
                .fetch_one(pool)
                .await?;
            (items, total)
        }
    };

    Ok(Page {
        items,
        total,
        page,
        per_page,
    })
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<EmployeeWithLookups>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE e.id = ? AND e.is_active = 1");
    let row = sqlx::query_as::<_, EmployeeWithLookups>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: NewEmployee) -> RepoResult<EmployeeWithLookups> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO employee (id, country_id, state_id, city_id, department_id, first_name, last_name, address, zip_code, dob, doj, is_active, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, 1, ?12, ?12)",
    )
    .bind(id)
    .bind(data.country_id)
    .bind(data.state_id)
    .bind(data.city_id)
    .bind(data.department_id)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.address)
    .bind(&data.zip_code)
    .bind(&data.dob)
    .bind(&data.doj)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &EmployeeUpdate,
) -> RepoResult<EmployeeWithLookups> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET \
            country_id = COALESCE(?1, country_id), \
            state_id = COALESCE(?2, state_id), \
            city_id = COALESCE(?3, city_id), \
            department_id = COALESCE(?4, department_id), \
            first_name = COALESCE(?5, first_name), \
            last_name = COALESCE(?6, last_name), \
            address = COALESCE(?7, address), \
            zip_code = COALESCE(?8, zip_code), \
            dob = COALESCE(?9, dob), \
            doj = COALESCE(?10, doj), \
            updated_at = ?11 \
         WHERE id = ?12 AND is_active = 1",
    )
    .bind(data.country_id)
    .bind(data.state_id)
    .bind(data.city_id)
    .bind(data.department_id)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.address)
    .bind(&data.zip_code)
    .bind(&data.dob)
    .bind(&data.doj)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Soft delete: the row stays for audit/history but leaves every list scope
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE employee SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1")
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Best-effort bulk delete: each id is attempted independently and failures
/// are reported per row instead of aborting the batch.
pub async fn bulk_delete(pool: &SqlitePool, ids: &[i64]) -> RepoResult<BulkDeleteOutcome> {
    let mut outcome = BulkDeleteOutcome {
        deleted: Vec::new(),
        failed: Vec::new(),
    };
    for &id in ids {
        match delete(pool, id).await {
            Ok(true) => outcome.deleted.push(id),
            Ok(false) => outcome.failed.push(BulkDeleteFailure {
                id,
                error: format!("Employee {id} not found"),
            }),
            Err(e) => outcome.failed.push(BulkDeleteFailure {
                id,
                error: e.to_string(),
            }),
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    /// In-memory SQLite pool with the employee schema and a small lookup set.
    /// max_connections(1) because every pooled connection would otherwise get
    /// its own private :memory: database.
    async fn test_pool() -> SqlitePool {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .pragma("foreign_keys", "ON");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        for sql in [
            "CREATE TABLE country (id INTEGER PRIMARY KEY, name TEXT NOT NULL UNIQUE)",
            "CREATE TABLE state (id INTEGER PRIMARY KEY, name TEXT NOT NULL, country_id INTEGER NOT NULL REFERENCES country(id))",
            "CREATE TABLE city (id INTEGER PRIMARY KEY, name TEXT NOT NULL, state_id INTEGER NOT NULL REFERENCES state(id))",
            "CREATE TABLE department (id INTEGER PRIMARY KEY, name TEXT NOT NULL UNIQUE)",
            "CREATE TABLE employee (
                id INTEGER PRIMARY KEY,
                country_id INTEGER NOT NULL REFERENCES country(id),
                state_id INTEGER NOT NULL REFERENCES state(id),
                city_id INTEGER NOT NULL REFERENCES city(id),
                department_id INTEGER NOT NULL REFERENCES department(id),
                first_name TEXT NOT NULL,
                last_name TEXT,
                address TEXT,
                zip_code TEXT,
                dob TEXT,
                doj TEXT,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_at INTEGER NOT NULL DEFAULT 0,
                updated_at INTEGER NOT NULL DEFAULT 0
            )",
            "INSERT INTO country (id, name) VALUES (1, 'Portugal')",
            "INSERT INTO state (id, name, country_id) VALUES (1, 'Lisboa', 1)",
            "INSERT INTO city (id, name, state_id) VALUES (1, 'Lisboa', 1)",
            "INSERT INTO department (id, name) VALUES (1, 'Engineering')",
        ] {
            sqlx::query(sql).execute(&pool).await.unwrap();
        }

        pool
    }

    fn new_employee(first_name: &str, doj: Option<&str>) -> NewEmployee {
        NewEmployee {
            country_id: 1,
            state_id: 1,
            city_id: 1,
            department_id: 1,
            first_name: first_name.to_string(),
            last_name: None,
            address: None,
            zip_code: None,
            dob: None,
            doj: doj.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_then_fetch_resolves_lookup_names() {
        let pool = test_pool().await;
        let created = create(&pool, new_employee("Ana", None)).await.unwrap();

        let fetched = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched.first_name, "Ana");
        assert_eq!(fetched.country_name, "Portugal");
        assert_eq!(fetched.department_name, "Engineering");
        assert!(fetched.is_active);
        assert!(fetched.created_at > 0);
    }

    #[tokio::test]
    async fn create_with_dangling_fk_is_rejected_by_sqlite() {
        let pool = test_pool().await;
        let mut data = new_employee("Ana", None);
        data.department_id = 999;
        let err = create(&pool, data).await.unwrap_err();
        assert!(matches!(err, RepoError::Database(_)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn update_changes_only_provided_fields() {
        let pool = test_pool().await;
        let mut data = new_employee("Ana", Some("2023-04-01"));
        data.last_name = Some("Silva".into());
        let created = create(&pool, data).await.unwrap();

        let patch = EmployeeUpdate {
            first_name: Some("Maria".into()),
            ..Default::default()
        };
        let updated = update(&pool, created.id, &patch).await.unwrap();

        assert_eq!(updated.first_name, "Maria");
        assert_eq!(updated.last_name.as_deref(), Some("Silva"));
        assert_eq!(updated.doj.as_deref(), Some("2023-04-01"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_missing_employee_is_not_found() {
        let pool = test_pool().await;
        let patch = EmployeeUpdate {
            first_name: Some("Maria".into()),
            ..Default::default()
        };
        let err = update(&pool, 42, &patch).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_is_soft_and_scopes_out_of_lists() {
        let pool = test_pool().await;
        let created = create(&pool, new_employee("Ana", None)).await.unwrap();

        assert!(delete(&pool, created.id).await.unwrap());
        // Second delete is a no-op
        assert!(!delete(&pool, created.id).await.unwrap());

        let page = find_page(&pool, &ListQuery::default()).await.unwrap();
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());

        // Row still physically present
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee WHERE id = ?")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn find_by_id_excludes_soft_deleted() {
        let pool = test_pool().await;
        let created = create(&pool, new_employee("Ana", None)).await.unwrap();
        assert!(find_by_id(&pool, created.id).await.unwrap().is_some());

        delete(&pool, created.id).await.unwrap();
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn bulk_delete_is_best_effort() {
        let pool = test_pool().await;
        let a = create(&pool, new_employee("Ana", None)).await.unwrap();
        let b = create(&pool, new_employee("Bruno", None)).await.unwrap();

        let outcome = bulk_delete(&pool, &[a.id, 999, b.id]).await.unwrap();
        assert_eq!(outcome.deleted, vec![a.id, b.id]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].id, 999);

        let page = find_page(&pool, &ListQuery::default()).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn search_matches_substring_of_name() {
        let pool = test_pool().await;
        create(&pool, new_employee("Mariana", None)).await.unwrap();
        create(&pool, new_employee("Bruno", None)).await.unwrap();

        let query = ListQuery {
            search: Some("rian".into()),
            ..Default::default()
        };
        let page = find_page(&pool, &query).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].first_name, "Mariana");
    }

    #[tokio::test]
    async fn sort_by_doj_orders_chronologically() {
        let pool = test_pool().await;
        create(&pool, new_employee("Late", Some("2024-06-01"))).await.unwrap();
        create(&pool, new_employee("Early", Some("2021-01-15"))).await.unwrap();
        create(&pool, new_employee("Mid", Some("2022-11-30"))).await.unwrap();

        let query = ListQuery {
            sort: Some("doj".into()),
            order: Some(SortOrder::Asc),
            ..Default::default()
        };
        let page = find_page(&pool, &query).await.unwrap();
        let names: Vec<_> = page.items.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(names, vec!["Early", "Mid", "Late"]);
    }

    #[tokio::test]
    async fn unknown_sort_column_is_rejected() {
        let pool = test_pool().await;
        let query = ListQuery {
            sort: Some("hash_pass".into()),
            ..Default::default()
        };
        let err = find_page(&pool, &query).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn pagination_slices_and_reports_total() {
        let pool = test_pool().await;
        for i in 0..7 {
            create(&pool, new_employee(&format!("Emp{i}"), None))
                .await
                .unwrap();
        }

        let query = ListQuery {
            sort: Some("first_name".into()),
            page: Some(2),
            per_page: Some(3),
            ..Default::default()
        };
        let page = find_page(&pool, &query).await.unwrap();
        assert_eq!(page.total, 7);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.page, 2);
        let names: Vec<_> = page.items.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(names, vec!["Emp3", "Emp4", "Emp5"]);
    }
}
