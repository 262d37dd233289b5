//! Employee API Module
//!
//! One admin resource: page endpoints (list / create / edit) serving the
//! declarative schemas alongside data, plus the CRUD operations the pages
//! submit to.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    // 页面路由：列表 / 新建 / 编辑
    let pages = Router::new()
        .route("/", get(handler::list_page))
        .route("/create", get(handler::create_page))
        .route("/{id}/edit", get(handler::edit_page));

    // 操作路由
    let operations = Router::new()
        .route("/", post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/bulk-delete", post(handler::bulk_delete));

    pages.merge(operations)
}
