//! JSON 请求体提取器
//!
//! `axum::Json` 的拒绝响应是纯文本且状态码不一 (400/415/422)，
//! 这里统一转换为 [`AppError`]，响应体与其它错误保持一致。

use axum::extract::{FromRequest, Request};
use axum::extract::rejection::JsonRejection;
use shared::error::{AppError, ErrorCode};

/// JSON body extractor whose rejection is an `AppError` (400)
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let code = match rejection {
        JsonRejection::JsonSyntaxError(_) => ErrorCode::InvalidFormat,
        JsonRejection::JsonDataError(_) => ErrorCode::ValidationFailed,
        _ => ErrorCode::InvalidRequest,
    };
    AppError::with_message(code, rejection.body_text())
}
