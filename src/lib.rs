//! Paperserve - AI Papers Daily 本地预览服务器
//!
//! 把站点目录作为静态文件对外提供，并自动打开浏览器：
//! - config/: 多源配置（环境变量 > config.toml > 默认值）
//! - http/: Axum 静态文件服务器（ServeDir + 优雅关闭）
//! - browser: 启动时打开系统默认浏览器

pub mod browser;
pub mod config;
pub mod http;

pub use config::{load_config, AppConfig};
