//! 根路径和健康检查
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 纯文本问候 |
//! | /health | GET | 进程存活检查 (不访问数据库) |

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub const GREETING: &str = "Hello from listable Server...";

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

async fn root() -> &'static str {
    GREETING
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
