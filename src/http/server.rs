//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::path::PathBuf;

use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::status_logging_middleware;
use super::routes::create_routes;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP 服务器
///
/// 将配置的根目录作为静态站点对外提供
pub struct HttpServer {
    config: ServerConfig,
    root: PathBuf,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// 构建 Router
    fn build_router(&self) -> Router {
        create_routes(&self.root)
            .layer(middleware::from_fn(status_logging_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// 绑定监听端口
    ///
    /// 端口被占用或无权限时直接返回错误，不重试、不换端口
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.config.addr()).await
    }

    /// 在已绑定的监听器上启动服务器（带优雅关闭）
    ///
    /// 阻塞直到 shutdown_signal 完成或发生致命错误；
    /// 收到关闭信号后停止接受新连接，等待在途响应完成
    pub async fn run_with_shutdown<F>(
        self,
        listener: TcpListener,
        shutdown_signal: F,
    ) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        info!(
            "Serving {} on {} (with graceful shutdown)",
            self.root.display(),
            self.config.addr()
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }

    /// 绑定并启动服务器，一直运行直到发生致命错误
    pub async fn run(self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        let router = self.build_router();

        info!("Serving {} on {}", self.root.display(), self.config.addr());

        axum::serve(listener, router).await?;

        Ok(())
    }
}
