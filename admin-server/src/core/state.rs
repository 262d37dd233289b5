//! Application state

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// Clone 是浅拷贝（连接池内部是 Arc），每个请求处理器拿到的都是同一份。
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务 (SQLite)
    pub db: DbService,
}

impl ServerState {
    /// 初始化状态：打开数据库并应用迁移
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: config.clone(),
            db,
        })
    }
}
