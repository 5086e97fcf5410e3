//! HTTP Layer - 静态文件服务
//!
//! 请求路径直接映射到根目录下的文件，无其他路由

pub mod middleware;
pub mod routes;
pub mod server;

pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
