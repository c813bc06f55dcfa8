//! Task API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /tasks | POST | 创建任务 (201) |
//! | /tasks | GET | 按列分组 {todo, inProgress, done} |
//! | /tasks/all | GET | 全部任务 |
//! | /tasks/drag/{id} | PUT | 拖拽: 更新 category + order |
//! | /tasks/modify/{id} | PUT | 编辑: 更新 title + description |
//! | /tasks/{id} | DELETE | 删除任务 |

mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/tasks", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_board).post(handler::create))
        .route("/all", get(handler::list_all))
        .route("/drag/{id}", put(handler::drag))
        .route("/modify/{id}", put(handler::modify))
        .route("/{id}", delete(handler::delete))
}
