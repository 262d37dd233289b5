//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工资源（表单/列表页面 + CRUD + 批量删除）
//! - [`lookups`] - 下拉选项接口（国家/州/城市/部门）

pub mod employees;
pub mod health;
pub mod lookups;

use crate::core::ServerState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the combined router
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(employees::router())
        .merge(lookups::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
