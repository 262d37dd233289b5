//! Lookup API Handlers
//!
//! Option lists for the form's select widgets. States and cities accept an
//! optional parent filter so dependent selects can narrow as the user picks.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::lookup;
use crate::utils::AppResult;
use shared::models::LookupOption;

/// GET /api/lookups/countries
pub async fn countries(State(state): State<ServerState>) -> AppResult<Json<Vec<LookupOption>>> {
    Ok(Json(lookup::find_countries(&state.db.pool).await?))
}

#[derive(Debug, Deserialize)]
pub struct StatesQuery {
    pub country_id: Option<i64>,
}

/// GET /api/lookups/states?country_id=1
pub async fn states(
    State(state): State<ServerState>,
    Query(query): Query<StatesQuery>,
) -> AppResult<Json<Vec<LookupOption>>> {
    Ok(Json(
        lookup::find_states(&state.db.pool, query.country_id).await?,
    ))
}

#[derive(Debug, Deserialize)]
pub struct CitiesQuery {
    pub state_id: Option<i64>,
}

/// GET /api/lookups/cities?state_id=1
pub async fn cities(
    State(state): State<ServerState>,
    Query(query): Query<CitiesQuery>,
) -> AppResult<Json<Vec<LookupOption>>> {
    Ok(Json(
        lookup::find_cities(&state.db.pool, query.state_id).await?,
    ))
}

/// GET /api/lookups/departments
pub async fn departments(State(state): State<ServerState>) -> AppResult<Json<Vec<LookupOption>>> {
    Ok(Json(lookup::find_departments(&state.db.pool).await?))
}
