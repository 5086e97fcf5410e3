//! Paperserve - AI Papers Daily 本地预览服务器
//!
//! 启动流程：加载配置 -> 绑定端口 -> 打印启动横幅 ->
//! 打开浏览器 -> 阻塞服务直到 Ctrl+C -> 打印关闭提示

use paperserve::browser::open_in_browser;
use paperserve::config::{load_config, print_config};
use paperserve::http::{HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},paperserve={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    print_config(&config);

    // 解析静态文件根目录：未配置时使用当前工作目录
    let root = match &config.server.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    anyhow::ensure!(
        root.is_dir(),
        "Serve root is not a directory: {}",
        root.display()
    );

    let url = config.server.public_base_url();
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, root);

    // 先绑定端口：端口被占用时在打印横幅前直接失败退出
    let listener = server.bind().await?;

    println!("🔬 AI Papers Daily");
    println!("   Server running at {}", url);
    println!("   Press Ctrl+C to stop");
    println!();

    // 打开浏览器（尽力而为，失败不影响服务）
    open_in_browser(&url);

    // 阻塞服务，Ctrl+C 触发优雅关闭
    server
        .run_with_shutdown(listener, async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    println!("\n   Server stopped.");

    Ok(())
}
