//! Employee Model

use serde::{Deserialize, Serialize};

/// Create employee payload (full form submission)
///
/// Every field is optional at the wire level so the validator can report
/// missing required fields one by one instead of the body failing to parse.
/// Dates (`dob`, `doj`) are carried as ISO `YYYY-MM-DD` strings; display
/// formatting (d/m/Y) is declared in the resource schema, not applied here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub country_id: Option<i64>,
    pub state_id: Option<i64>,
    pub city_id: Option<i64>,
    pub department_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub dob: Option<String>,
    pub doj: Option<String>,
}

/// Update employee payload (partial, COALESCE semantics)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub country_id: Option<i64>,
    pub state_id: Option<i64>,
    pub city_id: Option<i64>,
    pub department_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub dob: Option<String>,
    pub doj: Option<String>,
}

/// Employee with resolved lookup names (for list/detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeWithLookups {
    pub id: i64,
    pub country_id: i64,
    pub country_name: String,
    pub state_id: i64,
    pub state_name: String,
    pub city_id: i64,
    pub city_name: String,
    pub department_id: i64,
    pub department_name: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub dob: Option<String>,
    pub doj: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
