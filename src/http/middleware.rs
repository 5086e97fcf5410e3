//! HTTP Middleware
//!
//! 静态文件请求的状态码日志中间件

use axum::{extract::Request, middleware::Next, response::Response};

/// 状态码日志中间件
///
/// 文件不存在、路径穿越被拒等情况由 ServeDir 以 4xx 返回，
/// 这里统一补一条带请求路径的日志；5xx 记为 error
pub async fn status_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            "Failed to serve file"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            "File not served"
        );
    }

    response
}
