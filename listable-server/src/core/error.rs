//! 服务器级错误 (启动 / 监听)
//!
//! 请求级错误走 [`shared::error::AppError`]，这里只覆盖进程生命周期。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无法绑定端口 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务异常退出: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
