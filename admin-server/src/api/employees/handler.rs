//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::employee::{self, BulkDeleteOutcome, ListQuery, Page};
use crate::db::repository::lookup::{self, SqliteLookupSource};
use crate::resource::employee::{form_schema, table_schema};
use crate::resource::form;
use crate::resource::schema::{FormSchema, TableSchema};
use crate::utils::{AppError, AppResult};
use shared::models::{EmployeeCreate, EmployeeUpdate, EmployeeWithLookups, LookupOption};

/// Select options for every lookup-backed field on the form
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub countries: Vec<LookupOption>,
    pub states: Vec<LookupOption>,
    pub cities: Vec<LookupOption>,
    pub departments: Vec<LookupOption>,
}

async fn load_form_options(state: &ServerState) -> AppResult<FormOptions> {
    let pool = &state.db.pool;
    Ok(FormOptions {
        countries: lookup::find_countries(pool).await?,
        states: lookup::find_states(pool, None).await?,
        cities: lookup::find_cities(pool, None).await?,
        departments: lookup::find_departments(pool).await?,
    })
}

/// List page: table schema + one page of rows
#[derive(Debug, Serialize)]
pub struct ListPageResponse {
    pub table: TableSchema,
    #[serde(flatten)]
    pub page: Page<EmployeeWithLookups>,
}

/// GET /api/employees - 列表页（支持 search / sort / order / page / per_page）
pub async fn list_page(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListPageResponse>> {
    let page = employee::find_page(&state.db.pool, &query).await?;
    Ok(Json(ListPageResponse {
        table: table_schema(),
        page,
    }))
}

/// Create page: form schema + select options
#[derive(Debug, Serialize)]
pub struct CreatePageResponse {
    pub form: FormSchema,
    pub options: FormOptions,
}

/// GET /api/employees/create - 新建页
pub async fn create_page(State(state): State<ServerState>) -> AppResult<Json<CreatePageResponse>> {
    Ok(Json(CreatePageResponse {
        form: form_schema(),
        options: load_form_options(&state).await?,
    }))
}

/// Edit page: form schema + options + the record being edited
#[derive(Debug, Serialize)]
pub struct EditPageResponse {
    pub form: FormSchema,
    pub options: FormOptions,
    pub record: EmployeeWithLookups,
}

/// GET /api/employees/{id}/edit - 编辑页
pub async fn edit_page(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EditPageResponse>> {
    let record = employee::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(EditPageResponse {
        form: form_schema(),
        options: load_form_options(&state).await?,
        record,
    }))
}

/// GET /api/employees/{id} - 获取单个员工
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EmployeeWithLookups>> {
    let record = employee::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(record))
}

/// POST /api/employees - 创建员工（表单校验后落库）
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<EmployeeWithLookups>> {
    let schema = form_schema();
    let lookups = SqliteLookupSource::new(&state.db.pool);
    let record = form::validate_create(&schema, &payload, &lookups)
        .await?
        .map_err(AppError::FormRejected)?;

    let created = employee::create(&state.db.pool, record).await?;
    Ok(Json(created))
}

/// PUT /api/employees/{id} - 更新员工（部分字段）
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeWithLookups>> {
    let schema = form_schema();
    let lookups = SqliteLookupSource::new(&state.db.pool);
    form::validate_update(&schema, &payload, &lookups)
        .await?
        .map_err(AppError::FormRejected)?;

    let updated = employee::update(&state.db.pool, id, &payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/employees/{id} - 软删除员工
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let deleted = employee::delete(&state.db.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Employee {id} not found")));
    }
    Ok(Json(true))
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<i64>,
}

/// POST /api/employees/bulk-delete - 批量软删除（best-effort，逐行报告失败）
pub async fn bulk_delete(
    State(state): State<ServerState>,
    Json(payload): Json<BulkDeleteRequest>,
) -> AppResult<Json<BulkDeleteOutcome>> {
    if payload.ids.is_empty() {
        return Err(AppError::Invalid("ids must not be empty".into()));
    }
    let outcome = employee::bulk_delete(&state.db.pool, &payload.ids).await?;
    Ok(Json(outcome))
}
