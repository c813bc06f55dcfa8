//! HTTP 请求日志中间件

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// Log method, path, status and latency of every request (target `http_access`)
pub async fn log_request(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::warn!(target: "http_access", %method, %path, status = status.as_u16(), latency_ms, "request failed");
    } else {
        tracing::info!(target: "http_access", %method, %path, status = status.as_u16(), latency_ms, "request");
    }

    response
}
