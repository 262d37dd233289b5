//! Admin panel backend — Employee records
//!
//! 后台管理服务：以声明式 schema（表单 + 列表）驱动的员工 CRUD 资源。
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、服务器生命周期
//! ├── api/           # HTTP 路由和处理器
//! ├── resource/      # 资源声明（表单/列表 schema + 校验）
//! ├── db/            # 数据库层（连接池 + 仓储）
//! └── utils/         # 错误、日志、校验常量
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod resource;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use utils::logger::init_logger;
