//! HTTP Routes
//!
//! 静态文件路由定义
//!
//! 所有请求路径直接映射到根目录下的文件：
//! - `/foo/bar.css`  -> `<root>/foo/bar.css`（200，按扩展名推断 Content-Type）
//! - 目录请求        -> 该目录下的 index.html（如果存在）
//! - 文件不存在      -> 404
//! - 越出根目录的路径 -> 拒绝，绝不返回根目录之外的内容

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

/// 创建静态文件路由
///
/// 文件映射、Content-Type 推断、404 与路径穿越防护
/// 全部委托给 tower-http 的 `ServeDir`
pub fn create_routes(root: &Path) -> Router {
    let serve_dir = ServeDir::new(root).append_index_html_on_directories(true);

    Router::new().fallback_service(serve_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{header, Method, Request, StatusCode};
    use std::fs;
    use tower::util::ServiceExt;

    /// 构造临时根目录: index.html 与一个子目录文件
    fn temp_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "hello").unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/app.js"), "console.log(1);").unwrap();
        dir
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_existing_file_returns_contents() {
        let root = temp_root();
        let app = create_routes(root.path());

        let response = app
            .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));
        assert_eq!(body_string(response).await, "hello");
    }

    #[tokio::test]
    async fn test_nested_file_content_type() {
        let root = temp_root();
        let app = create_routes(root.path());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/assets/app.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "console.log(1);");
    }

    #[tokio::test]
    async fn test_root_serves_index_html() {
        let root = temp_root();
        let app = create_routes(root.path());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "hello");
    }

    #[tokio::test]
    async fn test_missing_file_returns_404() {
        let root = temp_root();
        let app = create_routes(root.path());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/missing.txt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_traversal_never_escapes_root() {
        let root = temp_root();
        // 根目录之外放一个敏感文件
        let outside = root.path().parent().unwrap().join("secret.txt");
        fs::write(&outside, "top secret").unwrap();

        let app = create_routes(root.path());

        for uri in ["/../secret.txt", "/%2e%2e/secret.txt", "/..%2fsecret.txt"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_ne!(response.status(), StatusCode::OK, "uri: {}", uri);
            assert_ne!(body_string(response).await, "top secret", "uri: {}", uri);
        }

        fs::remove_file(outside).unwrap();
    }

    #[tokio::test]
    async fn test_head_request_returns_empty_body() {
        let root = temp_root();
        let app = create_routes(root.path());

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::HEAD)
                    .uri("/index.html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_LENGTH)
                .unwrap()
                .to_str()
                .unwrap(),
            "5"
        );
        assert!(body_string(response).await.is_empty());
    }
}
