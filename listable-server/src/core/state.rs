use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::TaskRepository;

/// 服务器状态 - 请求处理器共享的依赖
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | 文档数据库客户端 |
/// | tasks | TaskRepository | 任务仓储 |
///
/// 所有字段都是廉价克隆，共享同一个数据库连接。
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub tasks: TaskRepository,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        let tasks = TaskRepository::new(db.db().clone());
        Self { config, db, tasks }
    }

    /// Connect the store in the background.
    ///
    /// The listener does not wait for it; until the connection is up,
    /// store-backed routes answer 500.
    pub fn connect_in_background(&self) -> tokio::task::JoinHandle<()> {
        let db = self.db.clone();
        let db_config = self.config.database.clone();
        if db_config.credentials.is_none() && !self.config.is_development() {
            tracing::warn!(
                environment = %self.config.environment,
                "DB_USER/DB_PASS not set, connecting to the store unauthenticated"
            );
        }
        tokio::spawn(async move {
            if let Err(e) = db.connect(&db_config).await {
                tracing::error!(url = %db_config.url, error = %e, "Failed to connect to the document store");
            }
        })
    }
}
