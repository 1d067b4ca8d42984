//! 核心响应结构

use serde::Serialize;

/// `{"message": ...}` 形式的响应体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

impl MessageBody {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// `{"error": ...}` 形式的错误响应体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl ErrorBody {
    pub const NOT_FOUND: ErrorBody = ErrorBody { error: "Not found" };
}
