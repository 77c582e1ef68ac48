//! API root.

use axum::Json;

use crate::dto::response::MessageResponse;

/// GET /api
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the EduHub backend!"))
}
