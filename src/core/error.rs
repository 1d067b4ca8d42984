//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::{io, net::SocketAddr};

use super::response::ErrorBody;

/// 接口错误类型
///
/// 未命中路由表的请求统一落到 `NotFound`，这是正常分支而不是故障。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, ErrorBody::NOT_FOUND),
        };

        (status, Json(body)).into_response()
    }
}

/// 进程级错误：监听或服务失败
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("无法绑定到 {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("服务器运行失败: {0}")]
    Serve(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_renders_fixed_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"error":"Not found"}"#);
    }

    #[test]
    fn bind_error_names_address() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:3335".parse().unwrap(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert!(err.to_string().contains("0.0.0.0:3335"));
    }
}
