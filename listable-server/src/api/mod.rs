//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 根路径和健康检查
//! - [`tasks`] - 任务看板接口
//! - [`echo`] - WebSocket 回声通道

pub mod echo;
pub mod health;
pub mod tasks;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::utils::middleware::log_request;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(tasks::router())
        .merge(echo::router())
}

/// Router bound to state with the HTTP middleware stack
pub fn app(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        .layer(CorsLayer::permissive())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
