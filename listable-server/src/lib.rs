//! listable-server - 任务看板后端
//!
//! # 架构概述
//!
//! - **任务接口** (`api::tasks`): 创建、分组/全量查询、拖拽、编辑、删除
//! - **数据库** (`db`): SurrealDB 文档存储
//! - **回声通道** (`api::echo`): WebSocket
//!
//! # 模块结构
//!
//! ```text
//! listable-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! └── utils/         # 日志、中间件、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Install the tracing subscriber from the loaded configuration
pub fn setup_environment(config: &Config) {
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
}
