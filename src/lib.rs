//! # Cafezinho API
//!
//! 咖啡店移动端使用的静态 JSON 接口：
//! - `GET /` 健康消息
//! - `GET /products` 商品列表
//! - `GET /products/meta/categories` 分类列表
//! - `GET /ping` 连通性测试
//!
//! 其余路径和非 GET 方法一律返回 404。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use config::ServerConfig;
pub use crate::core::error::{ApiError, ServerError};

pub type Result<T> = std::result::Result<T, ServerError>;
