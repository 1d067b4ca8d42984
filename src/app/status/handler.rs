//! 健康检查处理器

use axum::response::Json;

use crate::core::response::MessageBody;

pub async fn root() -> Json<MessageBody> {
    Json(MessageBody::new("API funcionando"))
}

pub async fn ping() -> Json<MessageBody> {
    Json(MessageBody::new("pong"))
}
