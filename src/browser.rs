//! Browser Launcher
//!
//! 启动后自动在系统默认浏览器中打开站点

/// 在系统默认浏览器中打开 URL
///
/// 尽力而为：失败只记录 warn（例如无图形环境），服务器照常运行
pub fn open_in_browser(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!(
            url = %url,
            error = %e,
            "Failed to open browser, please navigate to the URL manually"
        );
    }
}
