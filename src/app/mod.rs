//! 应用层：路由表
//!
//! | 方法 | 路径                         | 响应                          |
//! |------|------------------------------|-------------------------------|
//! | GET  | `/`                          | `{"message": "API funcionando"}` |
//! | GET  | `/products`                  | 单个商品的数组                |
//! | GET  | `/products/meta/categories`  | `["Drinks"]`                  |
//! | GET  | `/ping`                      | `{"message": "pong"}`         |
//!
//! 其他路径以及上述路径上的非 GET 方法都返回 404 `{"error": "Not found"}`。

pub mod catalog;
pub mod status;

use axum::{
    handler::Handler,
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::core::{
    error::ApiError,
    middleware::{request_logging_middleware, with_default_headers},
};
use catalog::service::CatalogService;

/// 路由表中的 (方法, 路径)，启动日志使用
pub const ROUTES: [(&str, &str); 4] = [
    ("GET", "/"),
    ("GET", "/products"),
    ("GET", "/products/meta/categories"),
    ("GET", "/ping"),
];

/// 构建完整的应用路由
pub fn router() -> Router {
    let routes = Router::new()
        .route("/", get_only(status::handler::root))
        .route("/products", get_only(catalog::handler::list_products))
        .route(
            "/products/meta/categories",
            get_only(catalog::handler::list_categories),
        )
        .route("/ping", get_only(status::handler::ping))
        .fallback(not_found)
        .with_state(CatalogService::default());

    let app = routes
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http());

    with_default_headers(app)
}

/// 只接受 GET；`get` 默认也会应答 HEAD，这里显式改成 404
fn get_only<H, T, S>(handler: H) -> MethodRouter<S>
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    get(handler).head(not_found).fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
