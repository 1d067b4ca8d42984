//! 核心中间件模块

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW, CONTENT_TYPE,
        },
        HeaderName, HeaderValue,
    },
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::time::Instant;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use uuid::Uuid;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// 每个响应都必须携带的头部（包括 404）
pub fn default_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ),
        (
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ),
        (
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ),
        (CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE)),
    ]
}

/// 给路由（含 fallback）挂上固定响应头
///
/// 不使用 `CorsLayer`：它会自己应答 OPTIONS 预检请求，而这里的 OPTIONS 必须走 404。
pub fn with_default_headers(router: Router) -> Router {
    default_headers().into_iter().fold(
        router.layer(middleware::map_response(strip_allow_header)),
        |router, (name, value)| router.layer(SetResponseHeaderLayer::overriding(name, value)),
    )
}

/// 方法不匹配时 axum 会附带 `Allow`，去掉后所有 404 完全一致
async fn strip_allow_header(mut response: Response) -> Response {
    response.headers_mut().remove(ALLOW);
    response
}

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(req).await;
    let status = response.status();

    info!(
        %request_id,
        %method,
        %uri,
        status = status.as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        user_agent = ?user_agent,
        "请求完成"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_headers_cover_cors_and_content_type() {
        let headers = default_headers();
        let names: Vec<_> = headers.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            [
                "access-control-allow-origin",
                "access-control-allow-methods",
                "access-control-allow-headers",
                "content-type",
            ]
        );
        assert_eq!(headers[1].1, "GET, POST, PUT, DELETE, OPTIONS");
    }

    #[tokio::test]
    async fn strip_allow_header_removes_allow() {
        let mut response = Response::new(axum::body::Body::empty());
        response
            .headers_mut()
            .insert(ALLOW, HeaderValue::from_static("GET,HEAD"));

        let response = strip_allow_header(response).await;
        assert!(response.headers().get(ALLOW).is_none());
    }
}
