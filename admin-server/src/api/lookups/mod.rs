//! Lookup API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Lookup router (read-only option lists)
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/lookups", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/countries", get(handler::countries))
        .route("/states", get(handler::states))
        .route("/cities", get(handler::cities))
        .route("/departments", get(handler::departments))
}
